//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations and pool setup

pub mod persistence;
