use reactivities_core::gateways::photo::{PhotoGateway, PhotoUpload};

use super::*;

/// Store the file through the gateway and record it for the user.
///
/// The stored file is removed again if it could not be recorded.
pub fn add_photo(
    connections: &sqlite::Connections,
    gateway: &dyn PhotoGateway,
    username: &str,
    upload: PhotoUpload<'_>,
) -> Result<Photo> {
    usecases::validate_photo_upload(&upload).map_err(|err| {
        info!("Rejected photo '{}' of '{}': {}", upload.file_name, username, err);
        err
    })?;
    let uploaded = gateway.add_photo(upload).map_err(|err| {
        warn!("Failed to store photo of '{}': {}", username, err);
        err
    })?;
    let public_id = uploaded.public_id.clone();
    let result = connections
        .exclusive()
        .map_err(error::AppError::from)
        .and_then(|mut db| {
            Ok(db.transaction(|conn| usecases::add_photo(conn, username, uploaded))?)
        });
    if let Err(err) = &result {
        warn!("Failed to add photo {} of '{}': {}", public_id, username, err);
        if let Err(err) = gateway.delete_photo(&public_id) {
            error!("Failed to remove orphaned photo {}: {}", public_id, err);
        }
    }
    result
}

pub fn delete_photo(
    connections: &sqlite::Connections,
    gateway: &dyn PhotoGateway,
    username: &str,
    id: &str,
) -> Result<()> {
    let photo = connections.exclusive()?.transaction(|conn| {
        usecases::delete_photo(conn, username, id).map_err(|err| {
            info!("User '{}' cannot delete photo {}: {}", username, id, err);
            err
        })
    })?;
    // The record is gone, a stale file is not worth failing the request
    if let Err(err) = gateway.delete_photo(photo.id.as_str()) {
        error!("Failed to remove stored photo {}: {}", photo.id, err);
    }
    Ok(())
}

pub fn set_main_photo(
    connections: &sqlite::Connections,
    username: &str,
    id: &str,
) -> Result<Photo> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_main_photo(conn, username, id).map_err(|err| {
            info!("User '{}' cannot set main photo {}: {}", username, id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn upload(data: &[u8]) -> PhotoUpload<'_> {
        PhotoUpload {
            file_name: "me.png",
            extension: Some("png"),
            data,
        }
    }

    #[test]
    fn first_photo_becomes_main() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let first = flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"1"))
            .unwrap();
        let second =
            flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"2"))
                .unwrap();
        assert!(first.is_main);
        assert!(!second.is_main);
        assert_eq!(2, fixture.photos.stored.borrow().len());

        let main = flows::set_main_photo(&fixture.db_connections, "bob", second.id.as_str())
            .unwrap();
        assert!(main.is_main);
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(
            second.id,
            db.try_get_main_photo_of_user("bob").unwrap().unwrap().id
        );
    }

    #[test]
    fn delete_photo_removes_the_file() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let main = flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"1"))
            .unwrap();
        let other =
            flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"2"))
                .unwrap();

        let err = flows::delete_photo(
            &fixture.db_connections,
            &fixture.photos,
            "bob",
            main.id.as_str(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::MainPhoto))
        ));

        flows::delete_photo(
            &fixture.db_connections,
            &fixture.photos,
            "bob",
            other.id.as_str(),
        )
        .unwrap();
        let stored = fixture.photos.stored.borrow();
        assert_eq!(1, stored.len());
        assert_eq!(main.id.as_str(), stored[0]);
    }

    #[test]
    fn reject_unsupported_uploads_before_storing() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        let text = PhotoUpload {
            file_name: "notes.txt",
            extension: Some("txt"),
            data: b"hello",
        };
        let err =
            flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", text).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::PhotoFormat))
        ));
        let err = flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b""))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::EmptyPhoto))
        ));
        assert!(fixture.photos.stored.borrow().is_empty());
    }

    #[test]
    fn remove_file_if_photo_cannot_be_recorded() {
        let fixture = BackendFixture::new();
        // There is no such user
        assert!(
            flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"1"))
                .is_err()
        );
        assert!(fixture.photos.stored.borrow().is_empty());
    }

    #[test]
    fn photos_of_other_users_cannot_be_deleted() {
        let fixture = BackendFixture::new();
        fixture.register("bob");
        fixture.register("tom");
        flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"1")).unwrap();
        let photo =
            flows::add_photo(&fixture.db_connections, &fixture.photos, "bob", upload(b"2"))
                .unwrap();
        let err = flows::delete_photo(
            &fixture.db_connections,
            &fixture.photos,
            "tom",
            photo.id.as_str(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
    }
}
