//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    ContactService, ContactServiceImpl, FeedService, FeedServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::clients::{create_http_client, InstagramClient, SendGridClient};
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn FeedService>,
    pub contact: Arc<dyn ContactService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the services to their HTTP clients.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let http = create_http_client()?;

        let instagram = Arc::new(InstagramClient::new(http.clone(), &settings.instagram));
        let sendgrid = Arc::new(SendGridClient::new(http, &settings.sendgrid));

        if settings.instagram.credentials().is_none() {
            tracing::warn!("RAPIDAPI_KEY or INSTAGRAM_USERNAME is not set; /api/instagram will fail");
        }
        if settings.sendgrid.api_key().is_none() {
            tracing::warn!("SENDGRID_API_KEY is not set; /api/contact will fail");
        }

        Ok(Self {
            feed: Arc::new(FeedServiceImpl::new(instagram, settings.instagram.clone())),
            contact: Arc::new(ContactServiceImpl::new(
                sendgrid,
                settings.contact.sender_email.clone(),
            )),
            settings: Arc::new(settings),
        })
    }
}

/// Build the router with all middleware applied
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let addr = settings.server_addr();

        let state = AppState::from_settings(settings)?;
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
