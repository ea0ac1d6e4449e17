//! SQLite storage of users, activities, attendances, photos and comments.

#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use reactivities_core::usecases as uc;
use std::{cell::RefCell, ops::Deref, sync::Arc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// A pooled connection that holds a lock on its pool
/// for as long as it lives.
pub struct LockedConnection<L> {
    _pool: L,
    conn: RefCell<PooledConnection>,
}

/// Any number of these may exist at the same time.
pub type DbReadOnly<'a> = LockedConnection<RwLockReadGuard<'a, ConnectionPool>>;

/// Excludes all other connections, readers included.
pub type DbReadWrite<'a> = LockedConnection<RwLockWriteGuard<'a, ConnectionPool>>;

impl<L> LockedConnection<L>
where
    L: Deref<Target = ConnectionPool>,
{
    fn checkout(pool: L, access: &str) -> Fallible<Self> {
        let conn = pool.get().map_err(|err| {
            log::error!("No pooled database connection available for {access}: {err}");
            err
        })?;
        Ok(Self {
            _pool: pool,
            conn: RefCell::new(conn),
        })
    }
}

/// The connection handed to the body of [`DbReadWrite::transaction`].
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

enum TransactionError {
    Aborted(uc::Error),
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err)
    }
}

impl DbReadWrite<'_> {
    /// Commits if `f` succeeds and rolls back otherwise.
    ///
    /// Errors of `f` are returned as they are, database
    /// failures become [`uc::Error::Repo`].
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut pooled = self.conn.borrow_mut();
        let sqlite: &mut SqliteConnection = &mut pooled;
        let outcome = sqlite.transaction::<T, TransactionError, _>(|conn| {
            let conn = DbConnection {
                conn: RefCell::new(conn),
            };
            f(&conn).map_err(|err| TransactionError::Aborted(err.into()))
        });
        outcome.map_err(|err| match err {
            TransactionError::Aborted(err) => err,
            TransactionError::Database(err) => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }
}

/// Shared handle to the connection pool.
///
/// Writers lock the whole pool so SQLite never sees two
/// writing connections at once.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        {
            use diesel::Connection as _;
            SqliteConnection::establish(url)
                .map_err(|err| anyhow!("Unable to open database '{url}': {err}"))?;
        }
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(EnforceForeignKeys))
            .build(ConnectionManager::new(url))?;
        tune_engine(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        LockedConnection::checkout(self.pool.read(), "reading")
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        LockedConnection::checkout(self.pool.write(), "writing")
    }
}

fn tune_engine(conn: &mut SqliteConnection) -> Fallible<()> {
    use diesel::connection::SimpleConnection as _;
    conn.batch_execute(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA wal_checkpoint(TRUNCATE);
         PRAGMA recursive_triggers = 1;
         PRAGMA encoding = 'UTF-8';",
    )?;
    Ok(())
}

// Deleting an activity cascades to its attendances and comments.
// SQLite only honors foreign keys per connection.
#[derive(Debug)]
struct EnforceForeignKeys;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for EnforceForeignKeys {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        use diesel::connection::SimpleConnection as _;
        conn.batch_execute("PRAGMA foreign_keys = 1")
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    let mut pooled = db.conn.into_inner();
    let sqlite: &mut SqliteConnection = &mut pooled;
    let applied = sqlite
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to migrate database: {err}"))?;
    if applied.is_empty() {
        log::info!("Database schema is up to date");
    }
    for version in applied {
        log::info!("Applied database migration {version}");
    }
    Ok(())
}

#[cfg(test)]
mod tests;
