//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{PostPage, PostRecord};

/// Feed page response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub posts: Vec<PostRecord>,

    /// Always present; `null` on the last page
    pub next_token: Option<String>,
}

impl From<PostPage> for FeedResponse {
    fn from(page: PostPage) -> Self {
        Self {
            posts: page.posts,
            next_token: page.next_cursor,
        }
    }
}

/// Contact submission response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: String,
}
