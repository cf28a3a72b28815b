//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod expand;
pub mod health;
pub mod list;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use expand::expand_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;

use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base62;

/// Resolves a short code, counting one click on success.
///
/// Codes that the encoder could never have produced are answered with
/// 404 without a database round trip.
pub(crate) async fn resolve(state: &AppState, code: &str) -> Result<String, AppError> {
    if !base62::is_canonical(code) {
        debug!("Rejected non-canonical code {:?}", code);
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "short_code": code }),
        ));
    }

    match state.url_service.expand(code).await {
        Ok(url) => {
            debug!("Resolved {} to {}", code, url);
            Ok(url)
        }
        Err(e) if e.is_not_found() => {
            debug!("Unknown code {}", code);
            Err(e)
        }
        Err(e) => {
            error!("Failed to resolve {}: {}", code, e);
            Err(e)
        }
    }
}
