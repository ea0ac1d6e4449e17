use super::*;

impl<'a> AttendanceRepo for DbReadWrite<'a> {
    fn add_attendance(&self, attendance: &Attendance) -> Result<()> {
        add_attendance(&mut self.conn.borrow_mut(), attendance)
    }
    fn remove_attendance(&self, activity_id: &str, username: &str) -> Result<()> {
        remove_attendance(&mut self.conn.borrow_mut(), activity_id, username)
    }
    fn try_get_attendance(
        &self,
        activity_id: &str,
        username: &str,
    ) -> Result<Option<Attendance>> {
        try_get_attendance(&mut self.conn.borrow_mut(), activity_id, username)
    }
    fn load_attendances_of_activity(&self, activity_id: &str) -> Result<Vec<Attendance>> {
        load_attendances_of_activity(&mut self.conn.borrow_mut(), activity_id)
    }
}

impl<'a> AttendanceRepo for DbConnection<'a> {
    fn add_attendance(&self, attendance: &Attendance) -> Result<()> {
        add_attendance(&mut self.conn.borrow_mut(), attendance)
    }
    fn remove_attendance(&self, activity_id: &str, username: &str) -> Result<()> {
        remove_attendance(&mut self.conn.borrow_mut(), activity_id, username)
    }
    fn try_get_attendance(
        &self,
        activity_id: &str,
        username: &str,
    ) -> Result<Option<Attendance>> {
        try_get_attendance(&mut self.conn.borrow_mut(), activity_id, username)
    }
    fn load_attendances_of_activity(&self, activity_id: &str) -> Result<Vec<Attendance>> {
        load_attendances_of_activity(&mut self.conn.borrow_mut(), activity_id)
    }
}

impl<'a> AttendanceRepo for DbReadOnly<'a> {
    fn add_attendance(&self, _attendance: &Attendance) -> Result<()> {
        unreachable!();
    }
    fn remove_attendance(&self, _activity_id: &str, _username: &str) -> Result<()> {
        unreachable!();
    }
    fn try_get_attendance(
        &self,
        activity_id: &str,
        username: &str,
    ) -> Result<Option<Attendance>> {
        try_get_attendance(&mut self.conn.borrow_mut(), activity_id, username)
    }
    fn load_attendances_of_activity(&self, activity_id: &str) -> Result<Vec<Attendance>> {
        load_attendances_of_activity(&mut self.conn.borrow_mut(), activity_id)
    }
}

fn add_attendance(conn: &mut SqliteConnection, attendance: &Attendance) -> Result<()> {
    let Attendance {
        activity_id,
        username,
        is_host,
        joined_at,
    } = attendance;
    let new_attendance = models::NewAttendance {
        activity_rowid: resolve_activity_rowid(conn, activity_id.as_str())?,
        user_rowid: resolve_user_rowid(conn, username)?,
        is_host: *is_host,
        joined_at: joined_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::attendances::table)
        .values(&new_attendance)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn remove_attendance(conn: &mut SqliteConnection, activity_id: &str, username: &str) -> Result<()> {
    use schema::attendances::dsl;
    let activity_rowid = resolve_activity_rowid(conn, activity_id)?;
    let user_rowid = resolve_user_rowid(conn, username)?;
    let count = diesel::delete(
        schema::attendances::table
            .filter(dsl::activity_rowid.eq(activity_rowid))
            .filter(dsl::user_rowid.eq(user_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn try_get_attendance(
    conn: &mut SqliteConnection,
    activity_id: &str,
    username: &str,
) -> Result<Option<Attendance>> {
    use schema::{activities::dsl as a_dsl, attendances::dsl, users::dsl as u_dsl};
    Ok(schema::attendances::table
        .inner_join(schema::activities::table)
        .inner_join(schema::users::table)
        .select((dsl::is_host, dsl::joined_at, a_dsl::id, u_dsl::username))
        .filter(a_dsl::id.eq(activity_id))
        .filter(u_dsl::username.eq(username))
        .first::<models::JoinedAttendance>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn load_attendances_of_activity(
    conn: &mut SqliteConnection,
    activity_id: &str,
) -> Result<Vec<Attendance>> {
    use schema::{activities::dsl as a_dsl, attendances::dsl, users::dsl as u_dsl};
    Ok(schema::attendances::table
        .inner_join(schema::activities::table)
        .inner_join(schema::users::table)
        .select((dsl::is_host, dsl::joined_at, a_dsl::id, u_dsl::username))
        .filter(a_dsl::id.eq(activity_id))
        .order_by((dsl::joined_at, dsl::user_rowid))
        .load::<models::JoinedAttendance>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl From<models::JoinedAttendance> for Attendance {
    fn from(a: models::JoinedAttendance) -> Self {
        let models::JoinedAttendance {
            is_host,
            joined_at,
            activity_id,
            username,
        } = a;
        Self {
            activity_id: activity_id.into(),
            username,
            is_host,
            joined_at: Timestamp::from_millis(joined_at),
        }
    }
}
