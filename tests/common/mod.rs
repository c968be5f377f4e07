//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure. Each `TestApp` runs
//! the real router against two `wiremock` servers standing in for the
//! Instagram and SendGrid APIs.

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use feed_relay::config::{
    ContactSettings, CorsSettings, InstagramSettings, SendGridSettings, ServerSettings, Settings,
    StaticFilesSettings, DEFAULT_INSTAGRAM_API_HOST,
};
use feed_relay::startup::{build_router, AppState};

pub const TEST_API_KEY: &str = "test-rapidapi-key";
pub const TEST_ACCOUNT: &str = "acme.prints";
pub const TEST_SENDGRID_KEY: &str = "SG.test";
pub const TEST_SENDER: &str = "owner@example.com";

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub instagram: MockServer,
    pub sendgrid: MockServer,
}

/// Status, headers, and body of a response
///
/// `body` is `Value::Null` when the response is not JSON.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub body: Value,
}

impl TestResponse {
    /// A response header as a string, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Settings pointing both upstreams at the given mock servers
pub fn test_settings(instagram_url: &str, sendgrid_url: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        instagram: InstagramSettings {
            api_key: Some(TEST_API_KEY.into()),
            username: Some(TEST_ACCOUNT.into()),
            api_host: DEFAULT_INSTAGRAM_API_HOST.into(),
            base_url: instagram_url.into(),
        },
        sendgrid: SendGridSettings {
            api_key: Some(TEST_SENDGRID_KEY.into()),
            base_url: sendgrid_url.into(),
        },
        contact: ContactSettings {
            sender_email: TEST_SENDER.into(),
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        static_files: StaticFilesSettings { dir: None },
        environment: "test".into(),
    }
}

impl TestApp {
    /// Create a test application with every setting present
    pub async fn new() -> Self {
        Self::with_settings(|_| {}).await
    }

    /// Create a test application after adjusting the default test settings
    pub async fn with_settings(customize: impl FnOnce(&mut Settings)) -> Self {
        let instagram = MockServer::start().await;
        let sendgrid = MockServer::start().await;

        let mut settings = test_settings(&instagram.uri(), &sendgrid.uri());
        customize(&mut settings);

        let state = AppState::from_settings(settings).expect("Failed to build app state");

        Self {
            router: build_router(state),
            instagram,
            sendgrid,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a request with extra headers and an empty body
    pub async fn request_with_headers(
        &self,
        method: &str,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let text = String::from_utf8_lossy(&bytes).into_owned();
        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}
