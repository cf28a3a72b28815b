//! Identifier allocation for new records.

use crate::error::AppError;
use async_trait::async_trait;

/// Hands out fresh record identifiers.
///
/// Identifiers are positive, strictly increasing and never handed out twice,
/// even to concurrent callers. An identifier that ends up unused (because
/// the insert lost a race) is simply skipped, so the sequence may have gaps.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteIdAllocator`] - sequence table in SQLite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdAllocator: Send + Sync {
    /// Allocates the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn allocate_id(&self) -> Result<i64, AppError>;
}
