//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /short_url` - Allocate a slug for a long URL
/// - `GET  /health`    - Database health check
/// - `GET  /{slug}`    - 302 redirect to the stored URL
///
/// `/health` is a static segment and takes precedence over `/{slug}`; the slug
/// generator never produces `health`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/short_url", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
}
