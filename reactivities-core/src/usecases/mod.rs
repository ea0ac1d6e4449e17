mod activity_details;
mod attend;
mod authorize;
mod create_activity;
mod create_comment;
mod delete_activity;
mod error;
mod login;
mod photos;
mod profiles;
mod register;
mod unattend;
mod update_activity;


pub use self::{
    activity_details::*, attend::*, authorize::*, create_activity::*, create_comment::*,
    delete_activity::*, error::Error, login::*, photos::*, profiles::*, register::*,
    unattend::*, update_activity::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
use self::prelude::*;

/// The main photo of a user is used as the avatar.
pub fn user_image<R: PhotoRepo>(repo: &R, username: &str) -> Result<Option<Url>> {
    Ok(repo
        .try_get_main_photo_of_user(username)?
        .map(|photo| photo.url))
}

pub fn get_user<R: UserRepo>(repo: &R, username: &str) -> Result<User> {
    repo.try_get_user_by_username(username)?
        .ok_or(Error::Unauthorized)
}

/// A user together with their current avatar.
#[derive(Debug, Clone)]
pub struct UserWithImage {
    pub user: User,
    pub image: Option<Url>,
}

pub fn get_current_user<R>(repo: &R, username: &str) -> Result<UserWithImage>
where
    R: UserRepo + PhotoRepo,
{
    let user = get_user(repo, username)?;
    let image = user_image(repo, &user.username)?;
    Ok(UserWithImage { user, image })
}
