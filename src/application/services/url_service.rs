//! URL shortening, resolution and statistics service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlStats, UrlSummary};
use crate::domain::repositories::{IdAllocator, UrlRepository};
use crate::error::AppError;
use crate::utils::base62;

/// Inserts tried by [`UrlService::shorten`] before giving up.
const MAX_INSERT_ATTEMPTS: usize = 5;

/// Service owning the URL records.
///
/// Shortening is idempotent: the first caller for a given URL creates the
/// record and every later caller, concurrent or not, receives the same code.
/// Codes are the base62 encoding of an identifier taken from the
/// [`IdAllocator`].
///
/// # Races
///
/// The existence check and the insert are separate statements. Two callers
/// shortening the same new URL may both miss the check; the unique index on
/// `original_url` lets only one insert through, and the loser re-reads the
/// winner's record instead of failing. A conflict with no winner means the
/// identifier was already taken, and the insert is retried with a fresh one.
pub struct UrlService<R: UrlRepository, A: IdAllocator> {
    repository: Arc<R>,
    allocator: Arc<A>,
}

impl<R: UrlRepository, A: IdAllocator> UrlService<R, A> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, allocator: Arc<A>) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Returns the short code for `original_url`, creating a record if needed.
    ///
    /// The URL is stored verbatim; callers normalize it beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the database fails or no
    /// free identifier turns up within a few attempts.
    pub async fn shorten(&self, original_url: &str) -> Result<String, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            return Ok(existing.short_code);
        }

        for _ in 0..MAX_INSERT_ATTEMPTS {
            let id = self.allocator.allocate_id().await?;
            let short_code = encode_id(id)?;

            let new_record = NewUrlRecord {
                id,
                original_url: original_url.to_string(),
                short_code,
                created_at: Utc::now(),
            };

            match self.repository.insert(new_record).await {
                Ok(record) => return Ok(record.short_code),
                Err(err) if err.is_conflict() => {
                    if let Some(winner) =
                        self.repository.find_by_original_url(original_url).await?
                    {
                        return Ok(winner.short_code);
                    }
                    // The id or code is held by a row the allocator never
                    // handed out; take the next id.
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::storage(
            "No free identifier found",
            json!({ "original_url": original_url, "attempts": MAX_INSERT_ATTEMPTS }),
        ))
    }

    /// Resolves a short code and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown; nothing is modified.
    /// Returns [`AppError::StorageUnavailable`] if the database fails.
    pub async fn expand(&self, short_code: &str) -> Result<String, AppError> {
        self.repository
            .resolve_and_count(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns the statistics for a short code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::StorageUnavailable`] if the database fails.
    pub async fn stats(&self, short_code: &str) -> Result<UrlStats, AppError> {
        self.repository
            .stats(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Lists every record, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the database fails.
    pub async fn list_all(&self) -> Result<Vec<UrlSummary>, AppError> {
        self.repository.list_all().await
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the database fails.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn get_short_url(&self, base_url: &str, short_code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), short_code)
    }
}

fn encode_id(id: i64) -> Result<String, AppError> {
    u64::try_from(id).map(base62::encode).map_err(|_| {
        AppError::storage(
            "Allocator returned a negative identifier",
            json!({ "id": id }),
        )
    })
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
}
