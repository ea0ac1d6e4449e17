use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "reactivities.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_TOKEN_KEY: &str = "TOKEN_KEY";

const DEFAULT_TOKEN_EXPIRE_IN: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub jwt: Jwt,
    pub photos: Photos,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::embedded_default()?
                }
                _ => return Err(err.into()),
            },
        };
        apply_env_overrides(
            &mut raw_config,
            env::var(ENV_NAME_DB_URL).ok(),
            env::var(ENV_NAME_TOKEN_KEY).ok(),
        );
        Self::try_from(raw_config)
    }
}

// Overrides are applied before the conversion so that
// they pass through the same validation as file values.
fn apply_env_overrides(
    raw_config: &mut raw::Config,
    db_url: Option<String>,
    token_key: Option<String>,
) {
    if let Some(db_url) = db_url {
        raw_config
            .db
            .get_or_insert_with(Default::default)
            .connection_sqlite = db_url;
    }
    if let Some(key) = token_key {
        raw_config
            .jwt
            .get_or_insert_with(Default::default)
            .token_key = Some(key);
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Jwt {
    pub token_key: Option<String>,
    pub token_expire_in: Duration,
}

pub struct Photos {
    /// File system directory for uploaded photos.
    pub dir: PathBuf,
    /// Public URL of the directory
    pub base_url: Url,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            jwt,
            photos,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Jwt {
            token_key,
            token_expire_in,
        } = jwt.unwrap_or_default();
        let token_key = token_key.filter(|key| !key.trim().is_empty());
        let jwt = Jwt {
            token_key,
            token_expire_in: token_expire_in.unwrap_or(DEFAULT_TOKEN_EXPIRE_IN),
        };

        let raw::Photos { dir, base_url } = photos.unwrap_or_default();
        let base_url = base_url
            .parse()
            .map_err(|err| anyhow!("Invalid photo base URL '{base_url}': {err}"))?;
        let photos = Photos { dir, base_url };

        Ok(Self {
            db,
            webserver,
            jwt,
            photos,
        })
    }
}
