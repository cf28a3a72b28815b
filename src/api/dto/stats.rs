//! DTOs for per-code statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlStats;

/// Statistics for a specific short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl StatsResponse {
    pub fn new(short_code: String, stats: UrlStats) -> Self {
        Self {
            short_code,
            original_url: stats.original_url,
            created_at: stats.created_at,
            click_count: stats.click_count,
        }
    }
}
