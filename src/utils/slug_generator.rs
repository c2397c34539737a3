//! Random slug generation.
//!
//! Slugs are drawn uniformly from the base62 alphabet. The generator has no
//! knowledge of stored slugs; uniqueness is enforced by the storage layer and
//! collisions are handled by [`crate::application::services::ShorteningService`].

use rand::Rng;

/// Alphabet used for generated slugs (URL-safe without escaping).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default number of characters in a generated slug.
pub const DEFAULT_SLUG_LENGTH: usize = 6;

/// Shortest slug length accepted by [`RandomSlugGenerator::new`].
pub const MIN_SLUG_LENGTH: usize = 4;

/// Longest slug length accepted by [`RandomSlugGenerator::new`]. Matches the
/// width of the `slug` column.
pub const MAX_SLUG_LENGTH: usize = 16;

/// Path segments served by the service itself.
///
/// A slug equal to one of these would be shadowed by the static route.
const RESERVED_SLUGS: &[&str] = &["health"];

/// Produces candidate slugs.
///
/// Implementations are pure: they never consult storage and may return a slug
/// that is already taken.
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Returns a new candidate slug.
    fn generate(&self) -> String;
}

/// Thread-local RNG backed generator producing fixed-length base62 slugs.
#[derive(Debug, Clone)]
pub struct RandomSlugGenerator {
    length: usize,
}

impl RandomSlugGenerator {
    /// Creates a generator producing slugs of `length` characters.
    ///
    /// `length` is clamped to [`MIN_SLUG_LENGTH`]..=[`MAX_SLUG_LENGTH`].
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_SLUG_LENGTH, MAX_SLUG_LENGTH),
        }
    }

    /// Length of the slugs this generator produces.
    pub fn length(&self) -> usize {
        self.length
    }

    fn random_slug(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl Default for RandomSlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SLUG_LENGTH)
    }
}

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> String {
        loop {
            let slug = self.random_slug();
            if !is_reserved(&slug) {
                return slug;
            }
        }
    }
}

/// Returns true if `slug` collides with a route served by the service.
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}
