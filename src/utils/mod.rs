//! Utility functions for short code encoding and URL processing.
//!
//! - [`base62`] - Identifier to short code encoding and back
//! - [`url_normalizer`] - URL normalization and sanitization

pub mod base62;
pub mod url_normalizer;
