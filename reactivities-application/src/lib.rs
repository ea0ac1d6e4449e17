#[macro_use]
extern crate log;

mod activities;
mod attendance;
mod comments;
mod photos;
mod users;

pub mod prelude {
    pub use super::{activities::*, attendance::*, comments::*, photos::*, users::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use reactivities_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use reactivities_db_sqlite::Connections;
}
