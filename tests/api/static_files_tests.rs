//! Static Front-end Serving Tests

use std::fs;

use axum::http::StatusCode;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestApp;

/// Front-end directory with an asset and a file shadowing an API path
fn public_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello from public").unwrap();
    fs::create_dir(dir.path().join("api")).unwrap();
    fs::write(dir.path().join("api").join("instagram"), "static shadow").unwrap();
    dir
}

async fn app_serving(dir: &TempDir) -> TestApp {
    let dir = dir.path().to_string_lossy().into_owned();
    TestApp::with_settings(|s| s.static_files.dir = Some(dir)).await
}

/// Test a file in the configured directory is served
#[tokio::test]
async fn test_static_file_is_served() {
    let dir = public_dir();
    let app = app_serving(&dir).await;

    let response = app.get("/hello.txt").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "hello from public");
}

/// Test missing assets are 404
#[tokio::test]
async fn test_missing_static_file_returns_404() {
    let dir = public_dir();
    let app = app_serving(&dir).await;

    let response = app.get("/missing.css").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

/// Test API routes take precedence over files with the same path
#[tokio::test]
async fn test_api_route_wins_over_static_file() {
    let dir = public_dir();
    let app = app_serving(&dir).await;
    Mock::given(method("GET"))
        .and(path("/v1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": [] },
            "pagination_token": null
        })))
        .expect(1)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "posts": [], "nextToken": null }));
}

/// Test the health endpoint is unaffected by static serving
#[tokio::test]
async fn test_health_still_served_with_static_dir() {
    let dir = public_dir();
    let app = app_serving(&dir).await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
}
