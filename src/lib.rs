//! # tinylink
//!
//! A URL shortener that turns row identifiers into base62 short codes and
//! counts every resolution, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and storage traits
//! - **Application Layer** ([`application`]) - The URL service: shorten, expand, stats, list
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and identifier allocation
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Base62 codec and URL normalization
//!
//! ## Guarantees
//!
//! - A short code is always the base62 encoding of its record's identifier
//! - Shortening the same URL always returns the same code, even under concurrency
//! - Every successful resolution increments the click count exactly once
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"   # Optional, this is the default
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats, UrlSummary};
    pub use crate::domain::repositories::{IdAllocator, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{SqliteIdAllocator, SqliteUrlRepository};
    pub use crate::state::{AppState, SqliteUrlService};
    pub use crate::utils::base62;
}
