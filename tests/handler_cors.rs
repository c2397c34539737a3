mod common;

use axum::http::{Method, header};
use axum_test::TestServer;
use short_url::config::CorsConfig;
use short_url::utils::slug_generator::RandomSlugGenerator;
use std::sync::Arc;

use common::InMemoryRepository;

fn server_with(allowed_origins: &[&str], allow_credentials: bool) -> TestServer {
    let cors = CorsConfig {
        allowed_origins: allowed_origins.iter().map(|o| o.to_string()).collect(),
        allow_credentials,
    };

    common::create_test_server_with_cors(
        Arc::new(InMemoryRepository::new()),
        Arc::new(RandomSlugGenerator::default()),
        &cors,
    )
}

async fn preflight(server: &TestServer, origin: &'static str) -> axum_test::TestResponse {
    server
        .method(Method::OPTIONS, "/short_url")
        .add_header(header::ORIGIN, origin)
        .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .add_header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .await
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let server = server_with(&["http://localhost:5500"], true);

    let response = preflight(&server, "http://localhost:5500").await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:5500"
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        "true"
    );
}

#[tokio::test]
async fn test_preflight_from_unlisted_origin() {
    let server = server_with(&["http://localhost:5500"], true);

    let response = preflight(&server, "http://evil.test").await;

    assert!(
        response
            .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_any_origin_without_credentials() {
    let server = server_with(&["*"], false);

    let response = preflight(&server, "http://anywhere.test").await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert!(
        response
            .maybe_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
}

#[tokio::test]
async fn test_any_origin_never_sends_credentials() {
    let server = server_with(&["*"], true);

    let response = preflight(&server, "http://anywhere.test").await;

    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert!(
        response
            .maybe_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
}

#[tokio::test]
async fn test_simple_request_carries_allow_origin() {
    let server = server_with(&["http://localhost:5500", "https://app.example.com"], true);

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, "https://app.example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "https://app.example.com"
    );
}
