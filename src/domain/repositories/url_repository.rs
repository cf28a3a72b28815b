//! Repository trait for shortened URL records.

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats, UrlSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` table.
///
/// Every method is a single atomic statement against storage. Callers can
/// share one instance across tasks without extra locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `original_url`, `short_code` or `id`
    /// is already taken.
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Looks up a short code and increments its click counter in one step.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(original_url))` if the code exists; the count went up by one
    /// - `Ok(None)` if not found; nothing was changed
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn resolve_and_count(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Returns the statistics of a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn stats(&self, short_code: &str) -> Result<Option<UrlStats>, AppError>;

    /// Lists every record, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlSummary>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
