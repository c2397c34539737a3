//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten. Stored as given, including the empty string.
    pub long_url: String,
}

/// Response carrying the allocated slug.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub data: String,
}
