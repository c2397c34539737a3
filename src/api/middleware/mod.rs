//! HTTP middleware for request processing.
//!
//! - [`cors`] - Cross-origin policy for browser clients
//! - [`tracing`] - Request/response logging

pub mod cors;
pub mod tracing;
