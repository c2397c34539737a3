//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and service errors into
//! status codes.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - CORS and tracing layers
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
