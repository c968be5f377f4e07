//! Upstream API Clients
//!
//! HTTP implementations of the domain source traits, sharing one
//! `reqwest::Client` connection pool.

pub mod instagram_client;
pub mod sendgrid_client;

pub use instagram_client::InstagramClient;
pub use sendgrid_client::SendGridClient;

use reqwest::Client;

/// Build the HTTP client shared by all upstream adapters.
pub fn create_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
