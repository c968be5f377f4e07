//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.settings.static_files.dir.clone();

    let router = Router::new()
        .nest("/api", api_routes())
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state);

    // Front-end assets for every path not claimed by a route
    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/instagram", get(handlers::feed::get_instagram_posts))
        .route("/contact", post(handlers::contact::submit_contact))
}
