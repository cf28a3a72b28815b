//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use tracing::{debug, error};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::prepare_url;

/// Creates (or returns the existing) short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "http://example.com/some/page",
///   "short_url": "http://localhost:3000/1",
///   "short_code": "1"
/// }
/// ```
///
/// Shortening the same URL again returns the same code.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed.
/// Returns 500 Internal Server Error if the database fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let original_url = prepare_url(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    let short_code = state
        .url_service
        .shorten(&original_url)
        .await
        .inspect_err(|e| error!("Failed to shorten {}: {}", original_url, e))?;

    debug!("Shortened {} as {}", original_url, short_code);

    let short_url = state
        .url_service
        .get_short_url(&state.base_url, &short_code);

    Ok(Json(ShortenResponse {
        original_url,
        short_url,
        short_code,
    }))
}
