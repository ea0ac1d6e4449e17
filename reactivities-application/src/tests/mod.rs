pub mod prelude {

    use std::cell::RefCell;

    pub use reactivities_core::{
        db::*,
        entities::*,
        gateways::photo::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Remembers the public ids of all stored photos.
    #[derive(Default)]
    pub struct InMemoryPhotoGW {
        pub stored: RefCell<Vec<String>>,
    }

    impl PhotoGateway for InMemoryPhotoGW {
        fn add_photo(&self, upload: PhotoUpload<'_>) -> anyhow::Result<PhotoUploadResult> {
            let public_id = Id::new().to_string();
            let url = format!(
                "http://localhost/photos/{public_id}.{}",
                upload.extension.unwrap_or("jpg")
            )
            .parse()?;
            self.stored.borrow_mut().push(public_id.clone());
            Ok(PhotoUploadResult { public_id, url })
        }
        fn delete_photo(&self, public_id: &str) -> anyhow::Result<()> {
            let mut stored = self.stored.borrow_mut();
            let pos = stored
                .iter()
                .position(|id| id == public_id)
                .ok_or_else(|| anyhow::anyhow!("Unknown photo {public_id}"))?;
            stored.remove(pos);
            Ok(())
        }
    }

    pub fn new_user(username: &str) -> usecases::NewUser {
        usecases::NewUser {
            display_name: username.to_uppercase(),
            username: username.into(),
            email: format!("{username}@test.com"),
            password: "Pa$$w0rd".into(),
        }
    }

    pub fn new_activity(id: Option<&str>) -> usecases::NewActivity {
        usecases::NewActivity {
            id: id.map(Into::into),
            title: "Meetup".into(),
            description: "Talk about Rust".into(),
            category: "culture".into(),
            date: Timestamp::now(),
            city: "Berlin".into(),
            venue: "Library".into(),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub photos: InMemoryPhotoGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            reactivities_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                photos: InMemoryPhotoGW::default(),
            }
        }

        pub fn register(&self, username: &str) {
            let db = self.db_connections.exclusive().unwrap();
            usecases::register_user(&db, new_user(username)).unwrap();
        }

        pub fn user(&self, username: &str) -> User {
            self.db_connections
                .shared()
                .unwrap()
                .get_user_by_username(username)
                .unwrap()
        }

        /// Returns the id of a new activity hosted by the given user
        pub fn create_activity(&self, host: &str) -> String {
            flows::create_activity(&self.db_connections, host, new_activity(None))
                .unwrap()
                .id
                .into()
        }
    }
}
