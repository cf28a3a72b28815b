//! DTOs for short code expansion endpoint.

use serde::Serialize;

/// Response for a resolved short code.
#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub original_url: String,
    pub short_code: String,
}
