//! RapidAPI Instagram Social API client.
//!
//! Implements [`PostSource`] over `GET {base_url}/v1/posts`.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::InstagramSettings;
use crate::domain::{FeedQuery, PostSource, SourceError, UpstreamPage, UpstreamPostItem};
use crate::infrastructure::metrics;

const UPSTREAM: &str = "instagram";

/// Top-level listing response. `data.items` is kept untyped so a non-array
/// value can be told apart from a malformed item. A `pagination_token` that
/// is not a string ends pagination.
#[derive(Debug, Deserialize)]
struct PostsEnvelope {
    #[serde(default)]
    data: Option<PostsData>,

    #[serde(default)]
    pagination_token: Value,
}

#[derive(Debug, Deserialize)]
struct PostsData {
    #[serde(default)]
    items: Value,
}

#[derive(Debug, Clone)]
pub struct InstagramClient {
    http: Client,
    base_url: String,
    api_host: String,
}

impl InstagramClient {
    pub fn new(http: Client, settings: &InstagramSettings) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_host: settings.api_host.clone(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/v1/posts", self.base_url)
    }
}

#[async_trait]
impl PostSource for InstagramClient {
    async fn list_posts(&self, query: FeedQuery) -> Result<UpstreamPage, SourceError> {
        let start = Instant::now();
        let result = self.request_page(&query).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(SourceError::Call(_)) => "error",
            Err(SourceError::Format(_)) => "invalid",
        };
        metrics::record_upstream_request(UPSTREAM, outcome, start.elapsed().as_secs_f64());

        result
    }
}

impl InstagramClient {
    async fn request_page(&self, query: &FeedQuery) -> Result<UpstreamPage, SourceError> {
        let mut params = vec![("username_or_id_or_url", query.account.as_str())];
        if let Some(cursor) = query.cursor.as_deref() {
            params.push(("pagination_token", cursor));
        }

        debug!(url = %self.posts_url(), "Requesting Instagram posts");

        let response = self
            .http
            .get(self.posts_url())
            .query(&params)
            .header("X-RapidAPI-Key", &query.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(|e| {
                error!("Network error calling Instagram API: {}", e);
                SourceError::Call(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Instagram API returned an error status");
            return Err(SourceError::Call(format!("{}: {}", status, body)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Call(e.to_string()))?;

        parse_page(&bytes)
    }
}

/// Parse a listing response body into an [`UpstreamPage`].
///
/// Fails unless `data.items` is an array whose elements all deserialize.
pub(crate) fn parse_page(body: &[u8]) -> Result<UpstreamPage, SourceError> {
    let envelope: PostsEnvelope = serde_json::from_slice(body)
        .map_err(|e| SourceError::Format(format!("invalid response body: {}", e)))?;

    let items = match envelope.data.map(|data| data.items) {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(SourceError::Format(
                "data.items is not an array".to_string(),
            ))
        }
    };

    let items = items
        .into_iter()
        .map(serde_json::from_value::<UpstreamPostItem>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SourceError::Format(format!("invalid post item: {}", e)))?;

    let pagination_token = match envelope.pagination_token {
        Value::String(token) => Some(token),
        _ => None,
    };

    Ok(UpstreamPage {
        items,
        pagination_token,
    })
}
