use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use reactivities_gateways::photos::PhotoToDirectory;
use reactivities_webserver::{Cfg as WebCfg, JwtCfg};

mod config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(author, version, about = "Meet people at activities and chat about them")]
struct Args {
    /// Configuration file
    #[arg(long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database (overrides the configuration)
    #[arg(long, env = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from other origins
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
    run(cfg).await
}

async fn run(cfg: config::Config) -> Result<()> {
    let config::Config {
        db,
        webserver,
        jwt,
        photos,
    } = cfg;

    log::info!("Connecting to SQLite database {}", db.conn_sqlite);
    let connections =
        reactivities_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
    reactivities_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let photo_gw = PhotoToDirectory::try_new(&photos.dir, photos.base_url)?;
    log::info!("Storing photos in {}", photo_gw.path().display());

    let web_cfg = WebCfg {
        jwt: JwtCfg {
            token_key: jwt.token_key,
            token_expire_in: jwt.token_expire_in,
        },
        photos_dir: Some(photos.dir),
    };
    reactivities_webserver::run(
        connections,
        Box::new(photo_gw),
        webserver.enable_cors,
        web_cfg,
        VERSION,
    )
    .await;
    Ok(())
}
