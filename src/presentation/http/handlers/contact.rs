//! Contact-Us Handler
//!
//! Contact submissions are dispatch-only: the receipt and business alert are
//! the whole operation, so a transport failure here fails the request.

use axum::{extract::State, Json};
use validator::Validate;

use crate::application::dto::request::ContactUsRequest;
use crate::application::dto::response::ContactUsResponse;
use crate::application::mappers;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Submit a contact-us message
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactUsRequest>,
) -> Result<Json<ContactUsResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let contact = mappers::contact_from_request(body);

    state
        .email_service
        .send_contact_us_message(&contact)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ContactUsResponse {
        message: "Your message has been sent successfully.".into(),
        contact,
    }))
}
