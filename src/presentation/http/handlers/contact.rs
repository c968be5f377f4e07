//! Contact Form Handlers

use axum::{extract::State, Json};

use crate::application::dto::response::ContactResponse;
use crate::application::services::ContactError;
use crate::domain::ContactSubmission;
use crate::presentation::http::extractors::ApiJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub const FIELDS_REQUIRED_MESSAGE: &str = "All fields are required.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message.";
pub const SEND_OK_MESSAGE: &str = "Message sent successfully!";

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingFields(fields) => {
                tracing::warn!(fields = ?fields, "Contact submission rejected");
                AppError::Validation(FIELDS_REQUIRED_MESSAGE.into())
            }
            ContactError::Delivery(e) => AppError::Upstream {
                message: SEND_FAILED_MESSAGE,
                detail: e.to_string(),
            },
        }
    }
}

/// Relay a contact-form submission by email
///
/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ContactSubmission>,
) -> Result<Json<ContactResponse>, AppError> {
    state.contact.submit_contact(body).await?;

    Ok(Json(ContactResponse {
        success: SEND_OK_MESSAGE.into(),
    }))
}
