//! Feed Service
//!
//! Fetches one page of posts from the upstream listing API and normalizes it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::InstagramSettings;
use crate::domain::{FeedQuery, PostPage, PostSource, SourceError};

/// Feed service trait
#[async_trait]
pub trait FeedService: Send + Sync {
    /// Fetch a page of posts. `None` (or an empty cursor) requests the first page.
    async fn fetch_page(&self, cursor: Option<String>) -> Result<PostPage, FeedError>;
}

/// Feed service errors
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("RapidAPI key or Instagram username is not configured")]
    NotConfigured,

    #[error("Unexpected data format from the Instagram API: {0}")]
    UpstreamFormat(String),

    #[error("Instagram API call failed: {0}")]
    UpstreamCall(String),
}

impl From<SourceError> for FeedError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Call(detail) => FeedError::UpstreamCall(detail),
            SourceError::Format(detail) => FeedError::UpstreamFormat(detail),
        }
    }
}

/// FeedService implementation
pub struct FeedServiceImpl<P>
where
    P: PostSource,
{
    source: Arc<P>,
    settings: InstagramSettings,
}

impl<P> FeedServiceImpl<P>
where
    P: PostSource,
{
    pub fn new(source: Arc<P>, settings: InstagramSettings) -> Self {
        Self { source, settings }
    }
}

#[async_trait]
impl<P> FeedService for FeedServiceImpl<P>
where
    P: PostSource + 'static,
{
    async fn fetch_page(&self, cursor: Option<String>) -> Result<PostPage, FeedError> {
        let credentials = self.settings.credentials().ok_or(FeedError::NotConfigured)?;
        let cursor = cursor.filter(|c| !c.is_empty());

        tracing::debug!(
            account = %credentials.username,
            cursor = ?cursor,
            "Fetching Instagram posts"
        );

        let page = self
            .source
            .list_posts(FeedQuery {
                api_key: credentials.api_key,
                account: credentials.username,
                cursor,
            })
            .await?;

        Ok(PostPage::from(page))
    }
}
