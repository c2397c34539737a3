//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its long URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response
///
/// `302 Found` with the stored URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown.
/// Returns 500 Internal Server Error if the stored URL cannot be sent as a header.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.resolution_service.resolve(&slug).await?;

    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        tracing::error!(%slug, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be redirected to", json!({ "slug": slug }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
