// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id (or username) and never modified or loaded
// by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn count_users(&self) -> Result<usize>;

    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait ActivityRepo {
    fn create_activity(&self, activity: &Activity) -> Result<()>;
    fn update_activity(&self, activity: &Activity) -> Result<()>;
    /// Also deletes all attendances and comments of the activity.
    fn delete_activity(&self, id: &str) -> Result<()>;

    fn get_activity(&self, id: &str) -> Result<Activity>;
    fn try_get_activity(&self, id: &str) -> Result<Option<Activity>>;
    fn all_activities_chronologically(&self) -> Result<Vec<Activity>>;
}

pub trait AttendanceRepo {
    /// Fails with [`Error::AlreadyExists`] if the user
    /// already attends the activity.
    fn add_attendance(&self, attendance: &Attendance) -> Result<()>;
    fn remove_attendance(&self, activity_id: &str, username: &str) -> Result<()>;

    fn try_get_attendance(&self, activity_id: &str, username: &str)
        -> Result<Option<Attendance>>;
    /// Ordered by the time of joining
    fn load_attendances_of_activity(&self, activity_id: &str) -> Result<Vec<Attendance>>;

    fn try_get_host_of_activity(&self, activity_id: &str) -> Result<Option<Attendance>> {
        Ok(self
            .load_attendances_of_activity(activity_id)?
            .into_iter()
            .find(|a| a.is_host))
    }
}

pub trait PhotoRepo {
    fn add_photo(&self, photo: &Photo) -> Result<()>;
    fn delete_photo(&self, id: &str) -> Result<()>;

    fn load_photos_of_user(&self, username: &str) -> Result<Vec<Photo>>;
    fn try_get_main_photo_of_user(&self, username: &str) -> Result<Option<Photo>>;

    /// Clears the main flag of all other photos of the owner.
    fn set_main_photo(&self, username: &str, id: &str) -> Result<()>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: &Comment) -> Result<()>;

    /// Oldest first
    fn load_comments_of_activity(&self, activity_id: &str) -> Result<Vec<Comment>>;
}
