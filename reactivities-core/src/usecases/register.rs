use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub display_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub fn register_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser {
        display_name,
        username,
        email,
        password,
    } = u;
    if !validate::is_valid_display_name(&display_name) {
        return Err(Error::DisplayName);
    }
    if !validate::is_valid_username(&username) {
        return Err(Error::Username);
    }
    let email = email.parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::Email);
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::EmailExists);
    }
    if repo.try_get_user_by_username(&username)?.is_some() {
        return Err(Error::UsernameExists);
    }
    let password = password.parse::<Password>()?;
    let new_user = User {
        id: Id::new(),
        username,
        display_name: display_name.trim().to_owned(),
        email,
        password,
        bio: None,
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
