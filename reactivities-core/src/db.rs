use crate::repositories::*;

/// All repositories that are backed by a single database.
pub trait Db: UserRepo + ActivityRepo + AttendanceRepo + PhotoRepo + CommentRepository {}

impl<T> Db for T where T: UserRepo + ActivityRepo + AttendanceRepo + PhotoRepo + CommentRepository {}
