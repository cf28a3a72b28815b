//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats, UrlSummary};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for URL storage and resolution.
///
/// Each method runs exactly one statement. SQLite executes a statement
/// atomically under its write lock, so the look-up-and-increment in
/// [`UrlRepository::resolve_and_count`] cannot lose updates, even when
/// several processes share the database file.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (id, original_url, short_code, created_at, click_count)
            VALUES (?1, ?2, ?3, ?4, 0)
            RETURNING id, original_url, short_code, created_at, click_count
            "#,
        )
        .bind(new_record.id)
        .bind(&new_record.original_url)
        .bind(&new_record.short_code)
        .bind(new_record.created_at)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .next()
        .ok_or(sqlx::Error::RowNotFound)?;

        Ok(record)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            WHERE original_url = ?1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn resolve_and_count(&self, short_code: &str) -> Result<Option<String>, AppError> {
        // Write statements are stepped to completion so the autocommit
        // transaction ends before the connection returns to the pool.
        let original_url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE urls
            SET click_count = click_count + 1
            WHERE short_code = ?1
            RETURNING original_url
            "#,
        )
        .bind(short_code)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .next();

        Ok(original_url)
    }

    async fn stats(&self, short_code: &str) -> Result<Option<UrlStats>, AppError> {
        let stats = sqlx::query_as::<_, UrlStats>(
            r#"
            SELECT original_url, created_at, click_count
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(stats)
    }

    async fn list_all(&self) -> Result<Vec<UrlSummary>, AppError> {
        let rows = sqlx::query_as::<_, UrlSummary>(
            r#"
            SELECT short_code, original_url, created_at, click_count
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
