use super::*;

pub fn create_activity(
    connections: &sqlite::Connections,
    host_username: &str,
    new_activity: usecases::NewActivity,
) -> Result<Activity> {
    let activity = connections.exclusive()?.transaction(|conn| {
        usecases::create_activity(conn, host_username, new_activity).map_err(|err| {
            warn!("Failed to create activity: {}", err);
            err
        })
    })?;
    info!(
        "User '{}' created activity {}",
        host_username, activity.id
    );
    Ok(activity)
}

pub fn update_activity(
    connections: &sqlite::Connections,
    id: &str,
    update: usecases::UpdateActivity,
) -> Result<Activity> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_activity(conn, id, update).map_err(|err| {
            warn!("Failed to update activity {}: {}", id, err);
            err
        })
    })?)
}

pub fn delete_activity(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_activity(conn, id).map_err(|err| {
            warn!("Failed to delete activity {}: {}", id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_activity_with_host() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let activity =
            flows::create_activity(&fixture.db_connections, "bob", new_activity(None)).unwrap();
        let db = fixture.db_connections.shared().unwrap();
        let details = usecases::load_activity_details(&db, activity.id.as_str()).unwrap();
        assert_eq!("Meetup", details.activity.title);
        assert_eq!(1, details.attendees.len());
        assert!(details.attendees[0].is_host);
        assert_eq!("bob", details.attendees[0].username);
    }

    #[test]
    fn create_activity_with_client_id() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let id = "4b1a86d5-7bb6-4e53-a8a4-67d8a1e4a1e7";
        let activity =
            flows::create_activity(&fixture.db_connections, "bob", new_activity(Some(id)))
                .unwrap();
        assert_eq!(id, activity.id.as_str());
        let err = flows::create_activity(&fixture.db_connections, "bob", new_activity(Some(id)))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::ActivityExists))
        ));
    }

    #[test]
    fn invalid_activity_leaves_no_traces() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let mut activity = new_activity(None);
        activity.title = "  ".into();
        assert!(flows::create_activity(&fixture.db_connections, "bob", activity).is_err());
        let db = fixture.db_connections.shared().unwrap();
        assert!(db.all_activities_chronologically().unwrap().is_empty());
    }

    #[test]
    fn update_and_delete_activity() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let activity =
            flows::create_activity(&fixture.db_connections, "bob", new_activity(None)).unwrap();
        let update = usecases::UpdateActivity {
            venue: Some("Park".into()),
            ..Default::default()
        };
        let updated =
            flows::update_activity(&fixture.db_connections, activity.id.as_str(), update)
                .unwrap();
        assert_eq!("Park", updated.venue);
        assert_eq!(activity.title, updated.title);

        flows::delete_activity(&fixture.db_connections, activity.id.as_str()).unwrap();
        let err =
            flows::delete_activity(&fixture.db_connections, activity.id.as_str()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
    }
}
