//! SQLite sequence-table identifier allocator.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::repositories::IdAllocator;
use crate::error::AppError;

/// Sequence name used for the `urls` table.
pub const URLS_SEQUENCE: &str = "urls";

/// Allocates identifiers from the `url_id_sequence` table.
///
/// The bump and the read happen in one `UPDATE ... RETURNING` statement, so
/// two allocations can never observe the same value.
pub struct SqliteIdAllocator {
    pool: Arc<SqlitePool>,
    sequence: String,
}

impl SqliteIdAllocator {
    /// Creates an allocator for the `urls` sequence.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self::with_sequence(pool, URLS_SEQUENCE)
    }

    /// Creates an allocator for a named sequence.
    pub fn with_sequence(pool: Arc<SqlitePool>, sequence: impl Into<String>) -> Self {
        Self {
            pool,
            sequence: sequence.into(),
        }
    }
}

#[async_trait]
impl IdAllocator for SqliteIdAllocator {
    async fn allocate_id(&self) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE url_id_sequence
            SET value = value + 1
            WHERE name = ?1
            RETURNING value
            "#,
        )
        .bind(&self.sequence)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .next();

        id.ok_or_else(|| {
            AppError::storage(
                "Identifier sequence is missing",
                json!({ "sequence": self.sequence }),
            )
        })
    }
}
