//! Application layer services implementing business logic.
//!
//! Services consume the repository and generator traits and expose the two
//! operations the HTTP layer needs.
//!
//! - [`services::ShorteningService`] - Slug allocation with collision retry
//! - [`services::ResolutionService`] - Slug lookup
//! - [`error::ServiceError`] - Errors surfaced to callers

pub mod error;
pub mod services;

pub use error::ServiceError;
