#[macro_use]
extern crate log;

use reactivities_core::gateways::photo::PhotoGateway;
use reactivities_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{jwt::JwtCfg, Cfg};

pub async fn run(
    connections: Connections,
    photos: Box<dyn PhotoGateway + Send + Sync>,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    web::run(connections, photos, enable_cors, cfg, version).await;
}
