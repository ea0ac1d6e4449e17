use super::*;

pub fn attend_activity(
    connections: &sqlite::Connections,
    activity_id: &str,
    username: &str,
) -> Result<Attendance> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::attend_activity(conn, activity_id, username).map_err(|err| {
            info!(
                "User '{}' cannot attend activity {}: {}",
                username, activity_id, err
            );
            err
        })
    })?)
}

pub fn unattend_activity(
    connections: &sqlite::Connections,
    activity_id: &str,
    username: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unattend_activity(conn, activity_id, username).map_err(|err| {
            info!(
                "User '{}' cannot unattend activity {}: {}",
                username, activity_id, err
            );
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn attend_twice_is_rejected() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        fixture.register("tom");
        let id = fixture.create_activity("bob");
        flows::attend_activity(&fixture.db_connections, &id, "tom").unwrap();
        let err = flows::attend_activity(&fixture.db_connections, &id, "tom").unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::AlreadyAttending))
        ));
    }

    #[test]
    fn host_cannot_unattend() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        fixture.register("tom");
        let id = fixture.create_activity("bob");
        let err = flows::unattend_activity(&fixture.db_connections, &id, "bob").unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::HostCannotUnattend))
        ));

        flows::attend_activity(&fixture.db_connections, &id, "tom").unwrap();
        flows::unattend_activity(&fixture.db_connections, &id, "tom").unwrap();
        let err = flows::unattend_activity(&fixture.db_connections, &id, "tom").unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::NotAttending))
        ));
    }

    #[test]
    fn attend_missing_activity() {
        let fixture = BackendFixture::new();
        fixture.register("tom");
        let err = flows::attend_activity(&fixture.db_connections, "missing", "tom").unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
    }
}
