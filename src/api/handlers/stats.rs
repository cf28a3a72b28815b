//! Handler for per-code statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base62;

/// Retrieves statistics for a short code.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Read-only: does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    if !base62::is_canonical(&code) {
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "short_code": code }),
        ));
    }

    let stats = state.url_service.stats(&code).await?;

    Ok(Json(StatsResponse::new(code, stats)))
}
