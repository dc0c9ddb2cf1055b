mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkjar::api::handlers::redirect_handler;

fn test_app(state: linkjar::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, _path, _dir) = common::create_test_state();

    state
        .link_service
        .create_link(
            "https://example.com/target".to_string(),
            Some("redirect1".to_string()),
        )
        .await
        .unwrap();

    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _path, _dir) = common::create_test_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_round_trip_after_create() {
    let (state, _path, _dir) = common::create_test_state();

    let link = state
        .link_service
        .create_link("https://round.trip/page?q=1".to_string(), None)
        .await
        .unwrap();

    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get(&format!("/{}", link.code)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://round.trip/page?q=1");
}

#[tokio::test]
async fn test_redirect_reads_externally_seeded_store() {
    let (state, path, _dir) = common::create_test_state();

    // Pre-existing data file in the documented flat-object format.
    common::seed_links(&path, &[("abc123", "https://example.com/page")]);

    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/page");
}
