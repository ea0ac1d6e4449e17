use crate::{id::Id, time::Timestamp};

/// A user attending an activity.
///
/// The pair (activity, user) is unique. Exactly one
/// attendance of an activity is flagged as its host.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub activity_id : Id,
    pub username    : String,
    pub is_host     : bool,
    pub joined_at   : Timestamp,
}
