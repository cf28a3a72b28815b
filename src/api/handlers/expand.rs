//! Handler for short code expansion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::expand::ExpandResponse;
use crate::api::handlers::resolve;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short code.
///
/// # Endpoint
///
/// `GET /expand/{code}`
///
/// Counts as a click, exactly like following the short link.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn expand_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ExpandResponse>, AppError> {
    let original_url = resolve(&state, &code).await?;

    Ok(Json(ExpandResponse {
        original_url,
        short_code: code,
    }))
}
