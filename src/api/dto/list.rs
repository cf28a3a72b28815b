//! DTOs for the full URL listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlSummary;

/// One shortened URL in the listing.
#[derive(Debug, Serialize)]
pub struct UrlListItem {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlListItem {
    pub fn from_summary(summary: UrlSummary, short_url: String) -> Self {
        Self {
            short_code: summary.short_code,
            short_url,
            original_url: summary.original_url,
            created_at: summary.created_at,
            click_count: summary.click_count,
        }
    }
}
