//! Infrastructure layer for external integrations.
//!
//! - [`database`] - Connection pool lifecycle and schema migrations
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
