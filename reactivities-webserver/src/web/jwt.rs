use anyhow::{anyhow, Result};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, time::Duration};
use time::OffsetDateTime;

use jwt_service::JwtService;

#[derive(Debug, Clone)]
pub struct JwtCfg {
    /// A random key is generated if missing
    pub token_key: Option<String>,
    pub token_expire_in: Duration,
}

impl Default for JwtCfg {
    fn default() -> Self {
        Self {
            token_key: None,
            token_expire_in: Duration::from_secs(7 * 24 * 60 * 60),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The username
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(cfg: &JwtCfg) -> Self {
        let key = cfg
            .token_key
            .as_deref()
            .filter(|key| !key.trim().is_empty());
        let jwt_service = match key {
            Some(key) => JwtService::new(key),
            None => {
                warn!("No token key configured, all tokens become invalid on restart");
                JwtService::random()
            }
        };
        Self {
            jwt_service,
            time_valid: cfg.token_expire_in,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String> {
        let exp = OffsetDateTime::now_utc() + self.time_valid;
        let exp = usize::try_from(exp.unix_timestamp())?;
        let claims = Claims {
            sub: username.to_string(),
            exp,
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token_and_get_username(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.jwt_service.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let jwt_service = &self.jwt_service;
        self.lock()
            .retain(|token| jwt_service.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

mod jwt_service {
    use super::{Claims, Result};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

    const ALGORITHM: Algorithm = Algorithm::HS512;

    /// A 256-bit base64 encoded secret
    fn generate_secret() -> String {
        STANDARD.encode(rand::random::<[u8; 32]>())
    }

    pub struct JwtService {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl JwtService {
        pub fn new(secret: &str) -> Self {
            Self {
                encoding_key: EncodingKey::from_secret(secret.as_bytes()),
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            }
        }

        pub fn random() -> Self {
            Self::new(&generate_secret())
        }

        pub fn encode(&self, claims: &Claims) -> Result<String> {
            let token = encode(&Header::new(ALGORITHM), claims, &self.encoding_key)?;
            Ok(token)
        }

        pub fn decode(&self, token: &str) -> Result<Claims> {
            let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::new(ALGORITHM))?;
            Ok(token_data.claims)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_state() -> JwtState {
        JwtState::new(&JwtCfg {
            token_key: Some("super secret key".into()),
            ..Default::default()
        })
    }

    #[test]
    fn blacklisting_works() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("bob").unwrap();
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
    }

    #[test]
    fn validation_works() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("bob").unwrap();
        let username = jwt_state.validate_token_and_get_username(&token).unwrap();
        assert_eq!(username, "bob");
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.validate_token_and_get_username(&token).is_err())
    }

    #[test]
    fn tokens_of_other_keys_are_rejected() {
        let token = jwt_state().generate_token("bob").unwrap();
        let other = JwtState::new(&JwtCfg::default());
        assert!(other.validate_token_and_get_username(&token).is_err());
    }

    #[test]
    fn blank_keys_are_replaced_by_a_random_key() {
        let blank = JwtState::new(&JwtCfg {
            token_key: Some(String::new()),
            ..Default::default()
        });
        let forged = JwtService::new("")
            .encode(&Claims {
                sub: "bob".into(),
                exp: 4_000_000_000,
            })
            .unwrap();
        assert!(blank.validate_token_and_get_username(&forged).is_err());
        let token = blank.generate_token("bob").unwrap();
        assert_eq!("bob", blank.validate_token_and_get_username(&token).unwrap());
    }

    #[test]
    fn invalid_tokens_are_removed() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("bob").unwrap();
        let invalid_token = "dubidubidu".to_string();
        jwt_state.blacklist_token(token.clone());
        jwt_state.blacklist_token(invalid_token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.is_on_blacklist(&invalid_token));
        jwt_state.remove_invalid_tokens();
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist(&invalid_token));
    }
}
