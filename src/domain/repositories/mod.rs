//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so the URL service can run against
//! SQLite in production and against `mockall` mocks in unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record storage and resolution
//! - [`IdAllocator`] - Fresh identifier allocation
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod id_allocator;
pub mod url_repository;

pub use id_allocator::IdAllocator;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use id_allocator::MockIdAllocator;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
