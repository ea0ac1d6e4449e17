use super::{prelude::*, user_image, UserWithImage};

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<UserWithImage>
where
    R: UserRepo + PhotoRepo,
{
    let user = repo
        .try_get_user_by_email(login.email)?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    let image = user_image(repo, &user.username)?;
    Ok(UserWithImage { user, image })
}
