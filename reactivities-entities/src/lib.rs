#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # reactivities-entities
//!
//! Reusable, agnostic domain entities for Reactivities.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod attendance;
pub mod comment;
pub mod email;
pub mod id;
pub mod password;
pub mod photo;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
