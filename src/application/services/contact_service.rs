//! Contact Service
//!
//! Validates a contact-form submission and relays it as an email.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::domain::{ContactSubmission, DeliveryError, EmailMessage, EmailSender};
use crate::shared::validation::failed_fields;

/// Contact service trait
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate the submission and dispatch exactly one notification.
    async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), ContactError>;
}

/// Contact service errors
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// ContactService implementation
pub struct ContactServiceImpl<E>
where
    E: EmailSender,
{
    sender: Arc<E>,
    sender_email: String,
}

impl<E> ContactServiceImpl<E>
where
    E: EmailSender,
{
    pub fn new(sender: Arc<E>, sender_email: impl Into<String>) -> Self {
        Self {
            sender,
            sender_email: sender_email.into(),
        }
    }
}

#[async_trait]
impl<E> ContactService for ContactServiceImpl<E>
where
    E: EmailSender + 'static,
{
    async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), ContactError> {
        if let Err(errors) = submission.validate() {
            return Err(ContactError::MissingFields(failed_fields(&errors)));
        }

        let message = EmailMessage::contact_notification(&submission, &self.sender_email);
        self.sender.send(message).await?;

        tracing::info!("Contact notification sent");
        Ok(())
    }
}
