//! Errors returned by application services.

use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Failure of a shortening or resolution request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Every generated candidate collided with an existing slug.
    #[error("could not allocate a unique slug after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// No mapping exists for the slug.
    #[error("no URL is registered for slug `{0}`")]
    NotFound(String),

    /// Repository failure the service does not recover from.
    ///
    /// The shortening loop consumes [`RepositoryError::DuplicateSlug`] itself, so
    /// in practice this carries database errors.
    #[error("storage failure")]
    Storage(#[from] RepositoryError),
}
