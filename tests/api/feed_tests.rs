//! Instagram Feed API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestApp, TEST_ACCOUNT, TEST_API_KEY};

fn two_item_page() -> serde_json::Value {
    json!({
        "data": {
            "count": 2,
            "items": [
                {
                    "code": "C1abc",
                    "is_video": false,
                    "thumbnail_url": "https://cdn.example/c1.jpg"
                },
                {
                    "code": "C2def",
                    "is_video": true,
                    "carousel_media": [{ "thumbnail_url": "https://cdn.example/c2.jpg" }]
                }
            ]
        },
        "pagination_token": "abc"
    })
}

/// Test first page: no token, two items, next token forwarded
#[tokio::test]
async fn test_first_page_returns_posts_and_next_token() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/posts"))
        .and(query_param("username_or_id_or_url", TEST_ACCOUNT))
        .and(query_param_is_missing("pagination_token"))
        .and(header("X-RapidAPI-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_page()))
        .expect(1)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "posts": [
                {
                    "media_url": "https://cdn.example/c1.jpg",
                    "permalink": "https://www.instagram.com/p/C1abc/",
                    "media_type": "IMAGE"
                },
                {
                    "media_url": "https://cdn.example/c2.jpg",
                    "permalink": "https://www.instagram.com/p/C2def/",
                    "media_type": "VIDEO"
                }
            ],
            "nextToken": "abc"
        })
    );
}

/// Test follow-up page forwards the token verbatim
#[tokio::test]
async fn test_token_is_forwarded_to_upstream() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/posts"))
        .and(query_param("pagination_token", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": [{ "code": "C3ghi" }] },
            "pagination_token": null
        })))
        .expect(1)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram?token=abc").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["posts"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["nextToken"], serde_json::Value::Null);
}

/// Test an empty token is treated as the first page
#[tokio::test]
async fn test_empty_token_is_not_forwarded() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(query_param_is_missing("pagination_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_page()))
        .expect(1)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram?token=").await;

    assert_eq!(response.status, StatusCode::OK);
}

/// Test repeated requests for the same cursor are identical
#[tokio::test]
async fn test_same_token_twice_yields_identical_pages() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_page()))
        .expect(2)
        .mount(&app.instagram)
        .await;

    let first = app.get("/api/instagram?token=abc").await;
    let second = app.get("/api/instagram?token=abc").await;

    assert_eq!(first.body, second.body);
}

/// Test missing credentials fail fast with 400 and no upstream call
#[tokio::test]
async fn test_missing_credentials_returns_400_without_upstream_call() {
    let app = TestApp::with_settings(|settings| settings.instagram.api_key = None).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_page()))
        .expect(0)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "error": "RapidAPI key or Instagram username is not configured on the server." })
    );
}

/// Test missing account identifier also fails fast
#[tokio::test]
async fn test_missing_username_returns_400() {
    let app = TestApp::with_settings(|settings| settings.instagram.username = None).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Test a non-array items field yields 500 and no posts
#[tokio::test]
async fn test_non_array_items_returns_500() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": "unavailable" },
            "pagination_token": "abc"
        })))
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "error": "Failed to fetch Instagram posts from the new API." })
    );
}

/// Test an upstream error status yields 500 without leaking the upstream body
#[tokio::test]
async fn test_upstream_error_status_returns_500() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("You are not subscribed"))
        .expect(1)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["error"],
        "Failed to fetch Instagram posts from the new API."
    );
}

/// Test an item with an unrecognized fallback shape still renders from its thumbnail
#[tokio::test]
async fn test_unreadable_fallback_source_does_not_fail_page() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": [
                {
                    "code": "C1abc",
                    "thumbnail_url": "https://cdn.example/c1.jpg",
                    "image_versions": { "candidates": [{ "url": "https://cdn.example/v.jpg" }] }
                },
                { "code": "C2def", "thumbnail_url": 17 }
            ] },
            "pagination_token": 12345
        })))
        .expect(1)
        .mount(&app.instagram)
        .await;

    let response = app.get("/api/instagram").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "posts": [
                {
                    "media_url": "https://cdn.example/c1.jpg",
                    "permalink": "https://www.instagram.com/p/C1abc/",
                    "media_type": "IMAGE"
                },
                {
                    "permalink": "https://www.instagram.com/p/C2def/",
                    "media_type": "IMAGE"
                }
            ],
            "nextToken": null
        })
    );
}
