//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default RapidAPI host for the Instagram Social API.
pub const DEFAULT_INSTAGRAM_API_HOST: &str = "instagram-social-api.p.rapidapi.com";

/// Default verified sender, used as both `from` and `to` of contact notifications.
pub const DEFAULT_SENDER_EMAIL: &str = "firststepprinting0@gmail.com";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// RapidAPI Instagram Social API credentials and target account
    pub instagram: InstagramSettings,

    /// SendGrid mail API configuration
    pub sendgrid: SendGridSettings,

    /// Contact relay configuration
    pub contact: ContactSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Static asset directory for the front-end
    #[serde(default)]
    pub static_files: StaticFilesSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Upstream content API configuration.
///
/// Both `api_key` and `username` are optional at load time. A feed request
/// made without them fails with a configuration error instead of the
/// process refusing to start.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramSettings {
    pub api_key: Option<String>,
    pub username: Option<String>,

    /// Value sent in the `X-RapidAPI-Host` header
    pub api_host: String,

    /// Scheme and host the `/v1/posts` path is appended to
    pub base_url: String,
}

/// Email delivery API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SendGridSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Contact relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    /// Verified single-sender address (both sender and recipient)
    pub sender_email: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

/// Static file serving configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticFilesSettings {
    pub dir: Option<String>,
}

/// Resolved credentials for the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramCredentials {
    pub api_key: String,
    pub username: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("instagram.api_host", DEFAULT_INSTAGRAM_API_HOST)?
            .set_default(
                "instagram.base_url",
                format!("https://{}", DEFAULT_INSTAGRAM_API_HOST),
            )?
            .set_default("sendgrid.base_url", "https://api.sendgrid.com")?
            .set_default("contact.sender_email", DEFAULT_SENDER_EMAIL)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map the plain variables a `.env` file usually carries
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("instagram.api_key", std::env::var("RAPIDAPI_KEY").ok())?
            .set_override_option(
                "instagram.username",
                std::env::var("INSTAGRAM_USERNAME").ok(),
            )?
            .set_override_option("sendgrid.api_key", std::env::var("SENDGRID_API_KEY").ok())?
            .set_override_option(
                "contact.sender_email",
                std::env::var("CONTACT_SENDER_EMAIL").ok(),
            )?
            .set_override_option("static_files.dir", std::env::var("STATIC_DIR").ok())?
            .build()?
            .try_deserialize()
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl InstagramSettings {
    /// Both credentials, or `None` if either is missing or blank.
    pub fn credentials(&self) -> Option<InstagramCredentials> {
        let api_key = non_empty(self.api_key.as_deref())?;
        let username = non_empty(self.username.as_deref())?;
        Some(InstagramCredentials {
            api_key: api_key.to_string(),
            username: username.to_string(),
        })
    }
}

impl SendGridSettings {
    /// The API key, or `None` if missing or blank.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

/// The value as configured, unless it is missing or whitespace only.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
