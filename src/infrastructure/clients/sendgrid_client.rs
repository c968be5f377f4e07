//! SendGrid v3 mail client.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::SendGridSettings;
use crate::domain::{DeliveryError, EmailMessage, EmailSender};
use crate::infrastructure::metrics;

const UPSTREAM: &str = "sendgrid";

#[derive(Debug, Serialize)]
struct SendGridPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

impl<'a> From<&'a EmailMessage> for SendGridPayload<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &message.to }],
            }],
            from: Address {
                email: &message.from,
            },
            subject: &message.subject,
            // SendGrid requires text/plain before text/html
            content: vec![
                Content {
                    content_type: "text/plain",
                    value: &message.text,
                },
                Content {
                    content_type: "text/html",
                    value: &message.html,
                },
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendGridClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SendGridClient {
    pub fn new(http: Client, settings: &SendGridSettings) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key().map(str::to_string),
        }
    }
}

#[async_trait]
impl EmailSender for SendGridClient {
    async fn send(&self, message: EmailMessage) -> Result<(), DeliveryError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DeliveryError::NotConfigured("SENDGRID_API_KEY is not set".to_string())
        })?;

        let start = Instant::now();
        let response = self
            .http
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(api_key)
            .json(&SendGridPayload::from(&message))
            .send()
            .await;

        let result = match response {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                tracing::error!(status, body = %body, "SendGrid rejected the message");
                Err(DeliveryError::Rejected { status, body })
            }
            Err(e) => {
                tracing::error!("Error sending email with SendGrid: {}", e);
                Err(DeliveryError::Transport(e.to_string()))
            }
        };

        let outcome = if result.is_ok() { "success" } else { "error" };
        metrics::record_upstream_request(UPSTREAM, outcome, start.elapsed().as_secs_f64());

        result
    }
}
