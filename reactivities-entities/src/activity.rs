use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub category    : String,
    pub date        : Timestamp,
    pub city        : String,
    pub venue       : String,
}
