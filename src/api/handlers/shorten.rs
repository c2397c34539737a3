//! Handler for the shortening endpoint.

use axum::Json;
use axum::extract::{State, rejection::JsonRejection};

use crate::api::dto::short_url::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Allocates a slug for a long URL.
///
/// # Endpoint
///
/// `POST /short_url`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/page" }
/// ```
///
/// `long_url` is stored verbatim; it is not checked to be a URL.
///
/// # Response
///
/// ```json
/// { "data": "aZ3kP9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON with a string `long_url`.
/// Returns 500 Internal Server Error if no unique slug could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;

    let slug = state.shortening_service.shorten(&payload.long_url).await?;

    tracing::info!(%slug, "Short URL created");

    Ok(Json(ShortenResponse { data: slug }))
}
