//! Post entity, upstream item shapes, and the post source trait.
//!
//! The upstream content API returns items whose image URL may live in one of
//! several places. [`UpstreamPostItem::media_url`] resolves it through an
//! ordered list of extractors; the first one that yields a URL wins.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Base of every post permalink.
pub const PERMALINK_BASE: &str = "https://www.instagram.com/p/";

/// Kind of media a post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Image,
    Video,
}

/// A normalized post, ready to be rendered by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Image URL chosen by the fallback chain; omitted when no source matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,

    /// `https://www.instagram.com/p/{code}/`
    pub permalink: String,

    pub media_type: MediaType,
}

/// One page of normalized posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub posts: Vec<PostRecord>,

    /// Opaque token for the next page; `None` once the feed is exhausted
    pub next_cursor: Option<String>,
}

/// A post item as returned by the upstream listing API.
///
/// Only the fields used for normalization are modelled. Unknown fields are
/// ignored. Only `code` is strict: a media source with an unexpected shape
/// reads as absent, and `is_video` is true only for a JSON `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpstreamPostItem {
    /// Short-code used in the public permalink
    pub code: String,

    #[serde(default, deserialize_with = "true_only")]
    pub is_video: bool,

    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail_url: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub image_versions: Option<ImageVersions>,

    #[serde(default, deserialize_with = "lenient")]
    pub carousel_media: Option<Vec<CarouselItem>>,
}

/// Image renditions of a post.
///
/// Seen both wrapped as `{ "items": [...] }` and as a bare list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageVersions {
    Wrapped { items: Vec<ImageCandidate> },
    List(Vec<ImageCandidate>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageCandidate {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// A sub-item of a carousel (multi-image) post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CarouselItem {
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail_url: Option<String>,
}

/// Raw page as returned by a [`PostSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamPage {
    pub items: Vec<UpstreamPostItem>,
    pub pagination_token: Option<String>,
}

type MediaUrlExtractor = fn(&UpstreamPostItem) -> Option<&str>;

/// Media URL sources in order of preference.
const MEDIA_URL_EXTRACTORS: &[MediaUrlExtractor] = &[
    direct_thumbnail,
    first_image_version,
    first_carousel_thumbnail,
];

fn direct_thumbnail(item: &UpstreamPostItem) -> Option<&str> {
    item.thumbnail_url.as_deref()
}

fn first_image_version(item: &UpstreamPostItem) -> Option<&str> {
    let candidates = match item.image_versions.as_ref()? {
        ImageVersions::Wrapped { items } => items,
        ImageVersions::List(items) => items,
    };
    candidates.first()?.url.as_deref()
}

fn first_carousel_thumbnail(item: &UpstreamPostItem) -> Option<&str> {
    item.carousel_media.as_ref()?.first()?.thumbnail_url.as_deref()
}

impl UpstreamPostItem {
    /// Resolve the image URL through the extractor chain.
    pub fn media_url(&self) -> Option<&str> {
        MEDIA_URL_EXTRACTORS
            .iter()
            .find_map(|extract| extract(self).filter(|url| !url.is_empty()))
    }

    pub fn permalink(&self) -> String {
        format!("{}{}/", PERMALINK_BASE, self.code)
    }

    pub fn media_type(&self) -> MediaType {
        if self.is_video {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

impl From<&UpstreamPostItem> for PostRecord {
    fn from(item: &UpstreamPostItem) -> Self {
        Self {
            media_url: item.media_url().map(str::to_string),
            permalink: item.permalink(),
            media_type: item.media_type(),
        }
    }
}

impl From<UpstreamPage> for PostPage {
    fn from(page: UpstreamPage) -> Self {
        Self {
            posts: page.items.iter().map(PostRecord::from).collect(),
            next_cursor: page.pagination_token,
        }
    }
}

fn true_only<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// `None` for `null` and for any value that does not fit `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Parameters of one upstream listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub api_key: String,
    pub account: String,
    pub cursor: Option<String>,
}

/// Errors raised by a [`PostSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport failure or non-success status.
    #[error("upstream call failed: {0}")]
    Call(String),

    /// The response did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Format(String),
}

/// Upstream content listing API.
///
/// Implemented in the infrastructure layer over HTTP.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch one page of raw post items.
    async fn list_posts(&self, query: FeedQuery) -> Result<UpstreamPage, SourceError>;
}
