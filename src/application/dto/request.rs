//! Request DTOs
//!
//! Data structures for API request bodies. Validation mirrors the field
//! constraints of the persisted entities; dates are normalized to UTC during
//! deserialization so everything downstream sees UTC instants only.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::BookingStatus;
use crate::shared::datetime::{deserialize_utc, deserialize_utc_option};

/// Times are free text, pattern-checked and never parsed into a time type.
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[0-9]|1[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-()]*$").expect("valid phone regex"));

/// Phone numbers: optional leading +, then digits with common separators.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Invalid phone number".into()))
    }
}

/// Create/update request for a standard booking
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    #[serde(deserialize_with = "deserialize_utc")]
    pub date: DateTime<Utc>,

    #[validate(regex(path = *TIME_RE, message = "Invalid time format (HH:mm)"))]
    pub time: String,

    #[validate(length(min = 1, max = 250, message = "Pickup location must be 1-250 characters"))]
    pub pickup_location: String,

    #[validate(length(
        min = 1,
        max = 250,
        message = "Drop-off location must be 1-250 characters"
    ))]
    pub drop_off_location: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    pub email: String,

    #[validate(
        custom(function = "validate_phone"),
        length(min = 1, max = 15, message = "Phone number must be 1-15 characters")
    )]
    pub phone_number: String,

    #[validate(length(max = 250, message = "Special requests must be at most 250 characters"))]
    pub special_requests: Option<String>,

    /// Defaults to pending when unset
    pub status: Option<BookingStatus>,
}

/// Create/update request for an airport transfer
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_return_leg"))]
pub struct AirportBookingRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "Pickup location is required"))]
    pub pickup_location: String,

    #[validate(length(min = 1, message = "Airport name is required"))]
    pub airport_name: String,

    #[serde(deserialize_with = "deserialize_utc")]
    pub pickup_date: DateTime<Utc>,

    #[validate(regex(path = *TIME_RE, message = "Invalid time format (HH:mm)"))]
    pub pickup_time: String,

    pub special_requests: Option<String>,

    pub is_return_trip: bool,

    #[serde(default, deserialize_with = "deserialize_utc_option")]
    pub return_date: Option<DateTime<Utc>>,

    #[validate(regex(path = *TIME_RE, message = "Invalid time format (HH:mm)"))]
    pub return_time: Option<String>,

    /// Defaults to pending when unset
    pub status: Option<BookingStatus>,
}

/// Return fields must both be present for return trips and both absent otherwise.
fn validate_return_leg(request: &AirportBookingRequest) -> Result<(), ValidationError> {
    if request.is_return_trip {
        if request.return_date.is_none() || request.return_time.is_none() {
            return Err(ValidationError::new("return_trip")
                .with_message("Return date and time are required for a return trip".into()));
        }
    } else if request.return_date.is_some() || request.return_time.is_some() {
        return Err(ValidationError::new("return_trip")
            .with_message("Return fields must be omitted for a one-way trip".into()));
    }
    Ok(())
}

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactUsRequest {
    #[validate(length(min = 3, max = 50, message = "Name must be 3-50 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 500, message = "Message must be 1-500 characters"))]
    pub message: String,
}
