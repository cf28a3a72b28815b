//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL may omit its scheme; `http://` is assumed.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 2048, message = "URL is required"))]
    pub url: String,
}

/// Response for a shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The URL as stored, after scheme defaulting and normalization.
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
}
