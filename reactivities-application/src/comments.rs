use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    author: &str,
    new_comment: usecases::NewComment,
) -> Result<usecases::CommentDetails> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_comment(conn, author, new_comment).map_err(|err| {
            warn!("Failed to create comment of '{}': {}", author, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn comments_appear_in_activity_details() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let id = fixture.create_activity("bob");
        let details = flows::create_comment(
            &fixture.db_connections,
            "bob",
            usecases::NewComment {
                activity_id: id.clone(),
                body: " Hello ".into(),
            },
        )
        .unwrap();
        assert_eq!("Hello", details.comment.body);
        assert_eq!("BOB", details.display_name);

        let db = fixture.db_connections.shared().unwrap();
        let details = usecases::load_activity_details(&db, &id).unwrap();
        assert_eq!(1, details.comments.len());
        assert_eq!("bob", details.comments[0].comment.author);
    }

    #[test]
    fn reject_empty_comment() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let id = fixture.create_activity("bob");
        let err = flows::create_comment(
            &fixture.db_connections,
            "bob",
            usecases::NewComment {
                activity_id: id,
                body: "   ".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::EmptyComment))
        ));
    }
}
