use super::*;

impl<'a> ActivityRepo for DbReadWrite<'a> {
    fn create_activity(&self, activity: &Activity) -> Result<()> {
        create_activity(&mut self.conn.borrow_mut(), activity)
    }
    fn update_activity(&self, activity: &Activity) -> Result<()> {
        update_activity(&mut self.conn.borrow_mut(), activity)
    }
    fn delete_activity(&self, id: &str) -> Result<()> {
        delete_activity(&mut self.conn.borrow_mut(), id)
    }
    fn get_activity(&self, id: &str) -> Result<Activity> {
        get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_activity(&self, id: &str) -> Result<Option<Activity>> {
        try_get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn all_activities_chronologically(&self) -> Result<Vec<Activity>> {
        all_activities_chronologically(&mut self.conn.borrow_mut())
    }
}

impl<'a> ActivityRepo for DbConnection<'a> {
    fn create_activity(&self, activity: &Activity) -> Result<()> {
        create_activity(&mut self.conn.borrow_mut(), activity)
    }
    fn update_activity(&self, activity: &Activity) -> Result<()> {
        update_activity(&mut self.conn.borrow_mut(), activity)
    }
    fn delete_activity(&self, id: &str) -> Result<()> {
        delete_activity(&mut self.conn.borrow_mut(), id)
    }
    fn get_activity(&self, id: &str) -> Result<Activity> {
        get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_activity(&self, id: &str) -> Result<Option<Activity>> {
        try_get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn all_activities_chronologically(&self) -> Result<Vec<Activity>> {
        all_activities_chronologically(&mut self.conn.borrow_mut())
    }
}

impl<'a> ActivityRepo for DbReadOnly<'a> {
    fn create_activity(&self, _activity: &Activity) -> Result<()> {
        unreachable!();
    }
    fn update_activity(&self, _activity: &Activity) -> Result<()> {
        unreachable!();
    }
    fn delete_activity(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn get_activity(&self, id: &str) -> Result<Activity> {
        get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_activity(&self, id: &str) -> Result<Option<Activity>> {
        try_get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn all_activities_chronologically(&self) -> Result<Vec<Activity>> {
        all_activities_chronologically(&mut self.conn.borrow_mut())
    }
}

fn create_activity(conn: &mut SqliteConnection, activity: &Activity) -> Result<()> {
    let new_activity = models::NewActivity::from(activity);
    let _count = diesel::insert_into(schema::activities::table)
        .values(&new_activity)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_activity(conn: &mut SqliteConnection, activity: &Activity) -> Result<()> {
    use schema::activities::dsl;
    let new_activity = models::NewActivity::from(activity);
    let count = diesel::update(schema::activities::table.filter(dsl::id.eq(new_activity.id)))
        .set(&new_activity)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_activity(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::activities::dsl;
    // Attendances and comments are deleted by ON DELETE CASCADE
    let count = diesel::delete(schema::activities::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_activity(conn: &mut SqliteConnection, id: &str) -> Result<Activity> {
    use schema::activities::dsl;
    Ok(schema::activities::table
        .filter(dsl::id.eq(id))
        .first::<models::ActivityEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_activity(conn: &mut SqliteConnection, id: &str) -> Result<Option<Activity>> {
    use schema::activities::dsl;
    Ok(schema::activities::table
        .filter(dsl::id.eq(id))
        .first::<models::ActivityEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_activities_chronologically(conn: &mut SqliteConnection) -> Result<Vec<Activity>> {
    use schema::activities::dsl;
    Ok(schema::activities::table
        .order_by((dsl::date, dsl::rowid))
        .load::<models::ActivityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl<'a> From<&'a Activity> for models::NewActivity<'a> {
    fn from(a: &'a Activity) -> Self {
        let Activity {
            id,
            title,
            description,
            category,
            date,
            city,
            venue,
        } = a;
        Self {
            id: id.as_str(),
            title,
            description,
            category,
            date: date.as_millis(),
            city,
            venue,
        }
    }
}

impl From<models::ActivityEntity> for Activity {
    fn from(a: models::ActivityEntity) -> Self {
        let models::ActivityEntity {
            rowid: _,
            id,
            title,
            description,
            category,
            date,
            city,
            venue,
        } = a;
        Self {
            id: id.into(),
            title,
            description,
            category,
            date: Timestamp::from_millis(date),
            city,
            venue,
        }
    }
}
