pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use reactivities_entities::{
        activity::*, attendance::*, comment::*, email::*, id::*, password::*, photo::*, time::*,
        url::Url, user::*,
    };
}
