//! Short URL entity representing a slug to long URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a slug to its original URL.
///
/// Records are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(slug: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub slug: String,
    pub long_url: String,
}

impl NewShortUrl {
    pub fn new(slug: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            long_url: long_url.into(),
        }
    }
}
