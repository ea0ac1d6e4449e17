use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_CONFIG_FILE: &str = include_str!("reactivities.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub jwt: Option<Jwt>,
    pub photos: Option<Photos>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Self {
            connection_sqlite: "reactivities.sqlite".into(),
            connection_pool_size: 10,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    #[serde(default)]
    pub cors: bool,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Jwt {
    pub token_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub token_expire_in: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Photos {
    pub dir: PathBuf,
    pub base_url: String,
}

impl Default for Photos {
    fn default() -> Self {
        Self {
            dir: "photos".into(),
            base_url: "http://127.0.0.1:8000/photos/".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg = Config::embedded_default().unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        let jwt = cfg.jwt.unwrap();
        assert!(jwt.token_key.is_none());
        assert_eq!(
            Some(Duration::from_secs(7 * 24 * 60 * 60)),
            jwt.token_expire_in
        );
        assert!(cfg.photos.is_some());
    }

    #[test]
    fn sections_are_optional() {
        let cfg: Config = toml::from_str("[webserver]\ncors = true").unwrap();
        assert!(cfg.db.is_none());
        assert!(cfg.webserver.unwrap().cors);
        assert!(cfg.jwt.is_none());
    }

    #[test]
    fn parse_jwt_section() {
        let cfg: Config = toml::from_str(
            r#"
            [jwt]
            token-key = "secret"
            token-expire-in = "2h"
            "#,
        )
        .unwrap();
        let jwt = cfg.jwt.unwrap();
        assert_eq!(Some("secret"), jwt.token_key.as_deref());
        assert_eq!(Some(Duration::from_secs(7200)), jwt.token_expire_in);
    }
}
