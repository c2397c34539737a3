//! Repository trait for short URL storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{NewShortUrl, ShortUrl};

/// Errors returned by [`ShortUrlRepository`] implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The slug is already taken. Nothing was written.
    #[error("slug `{0}` already exists")]
    DuplicateSlug(String),

    /// Any other storage failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for slug to long URL mappings.
///
/// Uniqueness of slugs is enforced by the storage engine, not by callers
/// checking for existence first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new mapping in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateSlug`] if the slug already exists; the
    /// transaction is rolled back and no row is written.
    ///
    /// Returns [`RepositoryError::Database`] on any other failure.
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError>;

    /// Finds a mapping by slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, RepositoryError>;

    /// Checks that the storage backend is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
