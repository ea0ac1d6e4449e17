use reactivities_entities::activity::Activity;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Usernames appear in URLs and as the subject of access tokens.
pub fn is_valid_username(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 64
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

pub fn is_valid_display_name(s: &str) -> bool {
    !is_blank(s)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityInvalidation {
    #[error("Invalid id")]
    Id,
    #[error("The title must not be empty")]
    Title,
    #[error("The description must not be empty")]
    Description,
    #[error("The category must not be empty")]
    Category,
    #[error("The city must not be empty")]
    City,
    #[error("The venue must not be empty")]
    Venue,
}

impl Validate for Activity {
    type Error = ActivityInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.id.is_valid() {
            return Err(Self::Error::Id);
        }
        if is_blank(&self.title) {
            return Err(Self::Error::Title);
        }
        if is_blank(&self.description) {
            return Err(Self::Error::Description);
        }
        if is_blank(&self.category) {
            return Err(Self::Error::Category);
        }
        if is_blank(&self.city) {
            return Err(Self::Error::City);
        }
        if is_blank(&self.venue) {
            return Err(Self::Error::Venue);
        }
        Ok(())
    }
}
