use super::*;

impl<'a> PhotoRepo for DbReadWrite<'a> {
    fn add_photo(&self, photo: &Photo) -> Result<()> {
        add_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photo(&self, id: &str) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }
    fn load_photos_of_user(&self, username: &str) -> Result<Vec<Photo>> {
        load_photos_of_user(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_main_photo_of_user(&self, username: &str) -> Result<Option<Photo>> {
        try_get_main_photo_of_user(&mut self.conn.borrow_mut(), username)
    }
    fn set_main_photo(&self, username: &str, id: &str) -> Result<()> {
        set_main_photo(&mut self.conn.borrow_mut(), username, id)
    }
}

impl<'a> PhotoRepo for DbConnection<'a> {
    fn add_photo(&self, photo: &Photo) -> Result<()> {
        add_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photo(&self, id: &str) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }
    fn load_photos_of_user(&self, username: &str) -> Result<Vec<Photo>> {
        load_photos_of_user(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_main_photo_of_user(&self, username: &str) -> Result<Option<Photo>> {
        try_get_main_photo_of_user(&mut self.conn.borrow_mut(), username)
    }
    fn set_main_photo(&self, username: &str, id: &str) -> Result<()> {
        set_main_photo(&mut self.conn.borrow_mut(), username, id)
    }
}

impl<'a> PhotoRepo for DbReadOnly<'a> {
    fn add_photo(&self, _photo: &Photo) -> Result<()> {
        unreachable!();
    }
    fn delete_photo(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn load_photos_of_user(&self, username: &str) -> Result<Vec<Photo>> {
        load_photos_of_user(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_main_photo_of_user(&self, username: &str) -> Result<Option<Photo>> {
        try_get_main_photo_of_user(&mut self.conn.borrow_mut(), username)
    }
    fn set_main_photo(&self, _username: &str, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn add_photo(conn: &mut SqliteConnection, photo: &Photo) -> Result<()> {
    let Photo {
        id,
        owner,
        url,
        is_main,
    } = photo;
    let new_photo = models::NewPhoto {
        id: id.as_str(),
        user_rowid: resolve_user_rowid(conn, owner)?,
        url: url.as_str(),
        is_main: *is_main,
    };
    let _count = diesel::insert_into(schema::photos::table)
        .values(&new_photo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn delete_photo(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::photos::dsl;
    let count = diesel::delete(schema::photos::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_photos_of_user(conn: &mut SqliteConnection, username: &str) -> Result<Vec<Photo>> {
    use schema::{photos::dsl, users::dsl as u_dsl};
    schema::photos::table
        .inner_join(schema::users::table)
        .select((dsl::id, dsl::url, dsl::is_main, u_dsl::username))
        .filter(u_dsl::username.eq(username))
        .order_by(dsl::rowid)
        .load::<models::JoinedPhoto>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_photo)
        .collect()
}

fn try_get_main_photo_of_user(conn: &mut SqliteConnection, username: &str) -> Result<Option<Photo>> {
    use schema::{photos::dsl, users::dsl as u_dsl};
    schema::photos::table
        .inner_join(schema::users::table)
        .select((dsl::id, dsl::url, dsl::is_main, u_dsl::username))
        .filter(u_dsl::username.eq(username))
        .filter(dsl::is_main.eq(true))
        .first::<models::JoinedPhoto>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_photo)
        .transpose()
}

fn set_main_photo(conn: &mut SqliteConnection, username: &str, id: &str) -> Result<()> {
    use schema::photos::dsl;
    let user_rowid = resolve_user_rowid(conn, username)?;
    let count = diesel::update(
        schema::photos::table
            .filter(dsl::user_rowid.eq(user_rowid))
            .filter(dsl::id.eq(id)),
    )
    .set(dsl::is_main.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    diesel::update(
        schema::photos::table
            .filter(dsl::user_rowid.eq(user_rowid))
            .filter(dsl::id.ne(id)),
    )
    .set(dsl::is_main.eq(false))
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(())
}

fn load_photo(p: models::JoinedPhoto) -> Result<Photo> {
    let models::JoinedPhoto {
        id,
        url,
        is_main,
        username,
    } = p;
    Ok(Photo {
        id: id.into(),
        owner: username,
        url: load_url(url)?,
        is_main,
    })
}
