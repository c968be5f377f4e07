//! Instagram Feed Handlers

use axum::{extract::State, Json};

use crate::application::dto::request::FeedQueryParams;
use crate::application::dto::response::FeedResponse;
use crate::application::services::FeedError;
use crate::presentation::http::extractors::ApiQuery;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "RapidAPI key or Instagram username is not configured on the server.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch Instagram posts from the new API.";

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::NotConfigured => AppError::Configuration(NOT_CONFIGURED_MESSAGE.into()),
            e @ (FeedError::UpstreamFormat(_) | FeedError::UpstreamCall(_)) => {
                AppError::Upstream {
                    message: FETCH_FAILED_MESSAGE,
                    detail: e.to_string(),
                }
            }
        }
    }
}

/// Fetch one page of posts
///
/// `GET /api/instagram?token=<cursor>`
pub async fn get_instagram_posts(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<FeedQueryParams>,
) -> Result<Json<FeedResponse>, AppError> {
    let page = state.feed.fetch_page(params.token).await?;
    Ok(Json(FeedResponse::from(page)))
}
