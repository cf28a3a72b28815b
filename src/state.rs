//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::{SqliteIdAllocator, SqliteUrlRepository};

/// URL service backed by SQLite.
pub type SqliteUrlService = UrlService<SqliteUrlRepository, SqliteIdAllocator>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<SqliteUrlService>,
    /// Prefix used to build full short URLs, e.g. `http://localhost:3000`.
    pub base_url: String,
}

impl AppState {
    pub fn new(url_service: Arc<SqliteUrlService>, base_url: impl Into<String>) -> Self {
        Self {
            url_service,
            base_url: base_url.into(),
        }
    }
}
