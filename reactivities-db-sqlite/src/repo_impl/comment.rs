use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_activity(&self, activity_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_activity(&mut self.conn.borrow_mut(), activity_id)
    }
}

impl<'a> CommentRepository for DbConnection<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_activity(&self, activity_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_activity(&mut self.conn.borrow_mut(), activity_id)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn load_comments_of_activity(&self, activity_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_activity(&mut self.conn.borrow_mut(), activity_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    let Comment {
        id,
        activity_id,
        author,
        body,
        created_at,
    } = comment;
    let new_comment = models::NewComment {
        id: id.as_str(),
        activity_rowid: resolve_activity_rowid(conn, activity_id.as_str())?,
        author_rowid: resolve_user_rowid(conn, author)?,
        body,
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comments_of_activity(
    conn: &mut SqliteConnection,
    activity_id: &str,
) -> Result<Vec<Comment>> {
    use schema::{activities::dsl as a_dsl, comments::dsl, users::dsl as u_dsl};
    Ok(schema::comments::table
        .inner_join(schema::activities::table)
        .inner_join(schema::users::table)
        .select((
            dsl::id,
            dsl::body,
            dsl::created_at,
            a_dsl::id,
            u_dsl::username,
        ))
        .filter(a_dsl::id.eq(activity_id))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl From<models::JoinedComment> for Comment {
    fn from(c: models::JoinedComment) -> Self {
        let models::JoinedComment {
            id,
            body,
            created_at,
            activity_id,
            author,
        } = c;
        Self {
            id: id.into(),
            activity_id: activity_id.into(),
            author,
            body,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}
