use crate::{repositories, util::validate::ActivityInvalidation};
use reactivities_entities::{email::EmailAddressParseError, password, time::TimestampParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Activity(#[from] ActivityInvalidation),
    #[error("The activity already exists")]
    ActivityExists,
    #[error("Invalid date")]
    Date,
    #[error("Invalid display name")]
    DisplayName,
    #[error("Invalid username")]
    Username,
    #[error("Invalid email address")]
    Email,
    #[error(transparent)]
    Password(#[from] password::ParseError),
    #[error("Email already exists")]
    EmailExists,
    #[error("Username already exists")]
    UsernameExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Already attending this activity")]
    AlreadyAttending,
    #[error("Not attending this activity")]
    NotAttending,
    #[error("You cannot remove yourself as host")]
    HostCannotUnattend,
    #[error("Empty comment")]
    EmptyComment,
    #[error("You cannot delete your main photo")]
    MainPhoto,
    #[error("Unsupported image format")]
    PhotoFormat,
    #[error("Empty photo")]
    EmptyPhoto,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<TimestampParseError> for Error {
    fn from(_: TimestampParseError) -> Self {
        Self::Date
    }
}
