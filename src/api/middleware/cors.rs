//! Cross-origin resource sharing policy.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Builds the CORS layer from configuration.
///
/// Methods and headers mirror whatever the preflight request asks for, which
/// stays valid when credentials are allowed (a literal `*` would not).
/// Origins that are not valid header values are skipped; [`crate::config::Config::validate`]
/// rejects them at startup.
pub fn layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        // tower-http refuses a wildcard origin combined with credentials.
        .allow_credentials(config.allow_credentials && !config.allows_any_origin())
}
