//! # Feed Relay
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Upstream HTTP clients
//! - HTTP server

use anyhow::Result;
use tracing::info;

use feed_relay::config::Settings;
use feed_relay::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    feed_relay::telemetry::init_tracing();

    info!("Starting Feed Relay...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!(
        "Server is running on http://{}",
        application.local_addr()?
    );
    application.run_until_stopped().await?;

    Ok(())
}
