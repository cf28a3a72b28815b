//! URL record entity and its read models.

use chrono::{DateTime, Utc};

/// A shortened URL as persisted in the `urls` table.
///
/// `short_code` is always the base62 encoding of `id`; both are fixed when
/// the record is created. Only `click_count` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            click_count,
        }
    }
}

/// Input data for inserting a new record.
///
/// Built by the URL service once an identifier has been allocated and encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

/// Statistics for a single short code.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlStats {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

/// One row of the full listing.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlSummary {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}
