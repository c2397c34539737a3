//! Slug allocation service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::error::ServiceError;
use crate::domain::entities::NewShortUrl;
use crate::domain::repositories::{RepositoryError, ShortUrlRepository};
use crate::utils::slug_generator::SlugGenerator;

/// Total number of insert attempts made for one shortening request.
pub const MAX_ATTEMPTS: usize = 5;

/// Service creating short URLs.
///
/// A candidate slug is inserted directly and the storage uniqueness constraint
/// decides whether it is free. On a collision a fresh candidate is generated and
/// the insert is retried immediately, up to [`MAX_ATTEMPTS`] times in total.
/// Concurrent requests racing for the same candidate are resolved by the
/// database: one insert wins, the other sees a duplicate and retries on its own.
pub struct ShorteningService {
    repository: Arc<dyn ShortUrlRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ShorteningService {
    /// Creates a new shortening service.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Stores `long_url` under a newly allocated slug and returns the slug.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ExhaustedRetries`] if every attempt collided.
    /// Returns [`ServiceError::Storage`] on any other storage failure; those are
    /// not retried.
    pub async fn shorten(&self, long_url: &str) -> Result<String, ServiceError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let slug = self.generator.generate();

            match self
                .repository
                .insert(NewShortUrl::new(slug, long_url))
                .await
            {
                Ok(short_url) => {
                    debug!(slug = %short_url.slug, attempt, "Short URL created");
                    return Ok(short_url.slug);
                }
                Err(RepositoryError::DuplicateSlug(slug)) => {
                    debug!(%slug, attempt, "Slug collision");
                }
                Err(err) => return Err(err.into()),
            }
        }

        warn!(attempts = MAX_ATTEMPTS, "Slug allocation exhausted all attempts");

        Err(ServiceError::ExhaustedRetries {
            attempts: MAX_ATTEMPTS,
        })
    }
}
