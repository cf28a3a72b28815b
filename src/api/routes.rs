//! API route configuration.

use crate::api::handlers::{
    expand_handler, health_handler, list_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`        - Shorten a URL (idempotent)
/// - `GET  /expand/{code}`  - Resolve a code to JSON (counts a click)
/// - `GET  /stats/{code}`   - Statistics for a code (read-only)
/// - `GET  /api/list`       - Every shortened URL, newest first
/// - `GET  /health`         - Database health check
/// - `GET  /{code}`         - Redirect to the original URL (counts a click)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/expand/{code}", get(expand_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/api/list", get(list_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
