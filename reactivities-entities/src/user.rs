use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    /// Unique login name, also used as the subject of access tokens
    pub username     : String,
    pub display_name : String,
    pub email        : EmailAddress,
    pub password     : Password,
    pub bio          : Option<String>,
}
