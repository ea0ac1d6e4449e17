use std::{ops::Deref, sync::Arc};

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{gateways::photo::PhotoGateway, usecases},
    web::{jwt, sqlite},
};
use reactivities_application::error::{AppError, BError};
use reactivities_core::usecases::Error as ParameterError;

/// Query parameter with a bearer token for clients that
/// cannot set headers, i.e. browsers opening a WebSocket.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account: Option<String>,
}

impl Auth {
    pub fn account(&self) -> Result<&str> {
        self.account
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    fn bearer_tokens_from_request(request: &Request) -> Vec<String> {
        let mut tokens: Vec<_> = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect();
        if let Some(Ok(token)) = request.query_value::<&str>(ACCESS_TOKEN_PARAM) {
            tokens.push(token.to_owned());
        }
        tokens
    }

    async fn account_from_jwt(request: &Request<'_>, bearer_tokens: &[String]) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_username(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_request(request);
        let account = Self::account_from_jwt(request, &bearer_tokens).await;
        Outcome::Success(Self {
            bearer_tokens,
            account,
        })
    }
}

/// An authenticated user.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn username(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account() {
            Ok(username) => Outcome::Success(Account(username.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// The authenticated host of the activity addressed by the
/// second segment of the routed path, i.e. `/activities/<id>`.
#[derive(Debug)]
pub struct Host(Account);

impl Host {
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

fn authorize_host(db: &sqlite::Connections, activity_id: &str, username: &str) -> Result<()> {
    Ok(usecases::authorize_host(&db.shared()?, activity_id, username)?)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Host {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account = try_outcome!(Account::from_request(request).await);
        let Some(activity_id) = request.routed_segment(1) else {
            return Outcome::Error((Status::Forbidden, ()));
        };
        let db = try_outcome!(request.guard::<&State<sqlite::Connections>>().await);
        match authorize_host(db, activity_id, account.username()) {
            Ok(()) => Outcome::Success(Host(account)),
            Err(AppError::Business(BError::Parameter(_))) => {
                debug!(
                    "User '{}' is not the host of activity {}",
                    account.username(),
                    activity_id
                );
                Outcome::Error((Status::Forbidden, ()))
            }
            Err(err) => {
                error!("Failed to authorize host of activity {activity_id}: {err}");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}

#[derive(Clone)]
pub struct Photos(pub Arc<dyn PhotoGateway + Send + Sync>);

impl Deref for Photos {
    type Target = dyn PhotoGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
