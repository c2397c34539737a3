//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /short_url` - Create a short URL
//! - `GET  /health`    - Health check
//! - `GET  /{slug}`    - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins, optional credentials
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::config::CorsConfig;
use crate::state::AppState;
use axum::Router;
use tower_http::normalize_path::NormalizePath;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_config` - allowed origins and credentials policy
///
/// Trailing slashes are trimmed before routing, so `/abc123/` resolves like `/abc123`.
pub fn app_router(state: AppState, cors_config: &CorsConfig) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(cors::layer(cors_config))
        .layer(tracing::layer());

    NormalizePath::trim_trailing_slash(router)
}
