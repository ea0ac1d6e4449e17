// NOTE:
// All timestamps are stored as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use reactivities_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod activity;
mod attendance;
mod comment;
mod photo;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, username: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::username.eq(username))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve user '{}': {}", username, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_activity_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::activities::dsl;
    schema::activities::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve activity id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_url(url: String) -> Result<Url> {
    url.parse().map_err(|err| {
        // This should never happen if URLs have been validated properly on insert
        log::error!("Failed to load invalid URL '{url}': {err}");
        repo::Error::Other(anyhow::anyhow!("Invalid URL: {url}"))
    })
}
