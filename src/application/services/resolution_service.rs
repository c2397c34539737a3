//! Slug lookup service.

use std::sync::Arc;

use crate::application::error::ServiceError;
use crate::domain::repositories::ShortUrlRepository;

/// Service resolving slugs back to their long URLs.
pub struct ResolutionService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the long URL stored for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no mapping matches.
    /// Returns [`ServiceError::Storage`] on database errors.
    pub async fn resolve(&self, slug: &str) -> Result<String, ServiceError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .map(|short_url| short_url.long_url)
            .ok_or_else(|| ServiceError::NotFound(slug.to_string()))
    }

    /// Checks that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the ping fails.
    pub async fn check_storage(&self) -> Result<(), ServiceError> {
        self.repository.ping().await.map_err(ServiceError::from)
    }
}
