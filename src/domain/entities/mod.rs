//! Core domain entities representing the business data model.
//!
//! - [`UrlRecord`] - A stored URL and its short code
//! - [`NewUrlRecord`] - Input for creating a record
//! - [`UrlStats`] - Usage statistics for one short code
//! - [`UrlSummary`] - One row of the full listing

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord, UrlStats, UrlSummary};
