//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored slug to long URL mapping
//! - [`NewShortUrl`] - Input for creating a mapping

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
