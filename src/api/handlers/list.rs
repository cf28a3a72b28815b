//! Handler for listing every shortened URL.

use axum::{Json, extract::State};

use crate::api::dto::list::UrlListItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all shortened URLs, most recently created first.
///
/// # Endpoint
///
/// `GET /api/list`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the database fails.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<UrlListItem>>, AppError> {
    let items = state
        .url_service
        .list_all()
        .await?
        .into_iter()
        .map(|summary| {
            let short_url = state
                .url_service
                .get_short_url(&state.base_url, &summary.short_code);
            UrlListItem::from_summary(summary, short_url)
        })
        .collect();

    Ok(Json(items))
}
