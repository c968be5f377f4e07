//! Contact submission, notification message, and the email sender trait.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A contact-form submission.
///
/// Absent and `null` fields deserialize to empty strings so that they are
/// reported by validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub name: String,

    /// Any non-empty string is accepted; the address format is not checked.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub message: String,
}

/// An outbound email, in the shape handed to the delivery API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailMessage {
    /// Build the site-owner notification for a submission.
    ///
    /// `sender` is the verified address and is used as both sender and
    /// recipient.
    ///
    /// Submitted text is placed into `html` as-is. A submission containing
    /// markup ends up as live markup in the notification.
    pub fn contact_notification(submission: &ContactSubmission, sender: &str) -> Self {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        Self {
            to: sender.to_string(),
            from: sender.to_string(),
            subject: format!("New Contact Form Message from {}", name),
            text: format!(
                "You have a new message from your website.\n\nName: {}\nEmail: {}\n\nMessage:\n{}",
                name, email, message
            ),
            html: format!(
                "<p>You have a new message from your website.</p>\n\
                 <p><strong>Name:</strong> {name}</p>\n\
                 <p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\n\
                 <p><strong>Message:</strong></p>\n\
                 <p>{message}</p>",
            ),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Errors raised by an [`EmailSender`].
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("email provider is not configured: {0}")]
    NotConfigured(String),

    #[error("email provider rejected the message: {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("email request failed: {0}")]
    Transport(String),
}

/// Email delivery API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Hand one message to the provider for delivery.
    async fn send(&self, message: EmailMessage) -> Result<(), DeliveryError>;
}
