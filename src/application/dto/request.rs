//! Request DTOs
//!
//! Data structures for API query strings and request bodies.

use serde::Deserialize;

/// Query string of `GET /api/instagram`
#[derive(Debug, Default, Deserialize)]
pub struct FeedQueryParams {
    /// Pagination cursor from the previous page's `nextToken`
    pub token: Option<String>,
}
