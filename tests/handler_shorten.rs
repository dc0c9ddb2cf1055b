mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use linkjar::api::handlers::shorten_handler;
use serde_json::json;

fn test_app(state: linkjar::AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_shorten_generates_code() {
    let (state, _path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: serde_json::Value = response.json();
    let code = body["code"].as_str().unwrap();

    assert_eq!(code.len(), 14);
    assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(body["target_url"], "https://example.com/page");
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let (state, _path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "my-link" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "my-link");
}

#[tokio::test]
async fn test_shorten_custom_code_conflict() {
    let (state, path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state.clone())).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com", "custom_code": "abc" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://b.com", "custom_code": "abc" }))
        .await;
    assert_eq!(second.status_code(), 409);

    let body: serde_json::Value = second.json();
    assert_eq!(body["error"]["code"], "conflict");

    // The original mapping survives the rejected create.
    let link = state.link_service.resolve_link("abc").await.unwrap();
    assert_eq!(link.target_url, "https://a.com");

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("https://a.com"));
    assert!(!raw.contains("https://b.com"));
}

#[tokio::test]
async fn test_shorten_empty_url_rejected() {
    let (state, _path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_invalid_custom_code_rejected() {
    let (state, _path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "not a code!" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_two_creates_get_distinct_codes() {
    let (state, _path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://one.example" }))
        .await;
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://two.example" }))
        .await;

    let first_body: serde_json::Value = first.json();
    let second_body: serde_json::Value = second.json();

    assert_ne!(first_body["code"], second_body["code"]);
}
