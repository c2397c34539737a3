//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod short_url_repository;

pub use short_url_repository::{RepositoryError, ShortUrlRepository};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
