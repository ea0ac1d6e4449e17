use crate::{id::Id, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Public id assigned by the photo storage
    pub id      : Id,
    /// Username of the owner
    pub owner   : String,
    pub url     : Url,
    pub is_main : bool,
}
