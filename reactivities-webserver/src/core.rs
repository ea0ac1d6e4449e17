pub use reactivities_core::{gateways, usecases};

pub mod prelude {
    pub use reactivities_core::{db::*, entities::*, repositories::*};
}
