use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : Id,
    pub activity_id : Id,
    /// Username of the author
    pub author      : String,
    pub body        : String,
    pub created_at  : Timestamp,
}
