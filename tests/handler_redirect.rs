mod common;

use axum::http::{StatusCode, header};
use serde_json::json;
use std::sync::Arc;

use common::{InMemoryRepository, ScriptedGenerator};

#[tokio::test]
async fn test_redirect_success() {
    let repository = Arc::new(InMemoryRepository::new());
    repository.seed("abc123", "https://example.com/page");
    let server = common::create_test_server(repository, Arc::new(ScriptedGenerator::new(&[])));

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/page"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repository) = common::create_default_server();

    let response = server.get("/nonexistent-slug").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["slug"], "nonexistent-slug");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let repository = Arc::new(InMemoryRepository::new());
    repository.seed("AbC123", "https://example.com");
    let server = common::create_test_server(repository, Arc::new(ScriptedGenerator::new(&[])));

    server.get("/AbC123").await.assert_status(StatusCode::FOUND);
    server.get("/abc123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_stable() {
    let repository = Arc::new(InMemoryRepository::new());
    repository.seed("abc123", "https://example.com/page");
    let server = common::create_test_server(repository, Arc::new(ScriptedGenerator::new(&[])));

    for _ in 0..3 {
        let response = server.get("/abc123").await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(
            response.header(header::LOCATION),
            "https://example.com/page"
        );
    }
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (server, _repository) = common::create_default_server();

    let response = server
        .post("/short_url")
        .json(&json!({ "long_url": "https://example.com/page" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let slug = body["data"].as_str().unwrap();

    let response = server.get(&format!("/{slug}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/page"
    );
}

#[tokio::test]
async fn test_redirect_storage_failure_is_server_error() {
    let (server, repository) = common::create_default_server();
    repository.set_unavailable();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_redirect_trailing_slash_is_normalized() {
    let repository = Arc::new(InMemoryRepository::new());
    repository.seed("abc123", "https://example.com/page");
    let server = common::create_test_server(repository, Arc::new(ScriptedGenerator::new(&[])));

    let response = server.get("/abc123/").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/page"
    );
}
