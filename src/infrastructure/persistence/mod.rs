//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx against a
//! single SQLite database file.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - URL storage, resolution and listing
//! - [`SqliteIdAllocator`] - Identifier allocation from a sequence table

pub mod sqlite_id_allocator;
pub mod sqlite_url_repository;

pub use sqlite_id_allocator::SqliteIdAllocator;
pub use sqlite_url_repository::SqliteUrlRepository;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool to the SQLite database at `database_url`.
///
/// The database file is created if it does not exist. WAL journaling lets
/// readers proceed while a writer holds the lock; `busy_timeout` bounds how
/// long a writer waits for the lock before the statement fails.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    busy_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(busy_timeout);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Applies pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history diverges.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
