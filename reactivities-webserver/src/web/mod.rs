use std::{path::PathBuf, sync::Arc};

use reactivities_boundary::Error as JsonErrorResponse;
use reactivities_core::gateways::photo::PhotoGateway;
use rocket::{
    catch, catchers, config::Config as RocketCfg, fs::FileServer, http::Status,
    serde::json::Json, Request, Rocket, Route,
};

pub mod api;
mod chat;
mod guards;
pub mod jwt;


pub(crate) mod sqlite {
    pub use reactivities_db_sqlite::Connections;
}

#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub jwt: jwt::JwtCfg,
    /// Uploaded photos are served from this directory
    /// under `/photos` if it exists.
    pub photos_dir: Option<PathBuf>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    photos: Box<dyn PhotoGateway + Send + Sync>,
}

#[catch(default)]
fn default_catcher(status: Status, _: &Request) -> (Status, Json<JsonErrorResponse>) {
    let message = status.reason_lossy().to_string();
    (
        status,
        Json(JsonErrorResponse {
            http_status: status.code,
            message,
        }),
    )
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { photos } = gateways;

    let jwt_state = jwt::JwtState::new(&cfg.jwt);
    let hub = chat::Hub::default();

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let photos = guards::Photos(Arc::from(photos));
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(hub)
        .manage(photos)
        .manage(version)
        .register("/", catchers![default_catcher]);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }

    match cfg.photos_dir {
        Some(dir) if dir.is_dir() => {
            info!("Serving photos from {}", dir.display());
            instance.mount("/photos", FileServer::from(dir))
        }
        Some(dir) => {
            warn!("Photo directory {} does not exist", dir.display());
            instance
        }
        None => instance,
    }
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", chat::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    photos: Box<dyn PhotoGateway + Send + Sync>,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { photos };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
