//! Airport Booking Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::AirportBookingRequest;
use crate::application::dto::response::{
    AirportBookingCreatedResponse, AirportBookingResponse, MessageResponse,
};
use crate::application::mappers;
use crate::application::services::BookingError;
use crate::domain::BookingId;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn map_error(err: BookingError, id: &BookingId) -> AppError {
    match err {
        BookingError::NotFound => AppError::NotFound(format!("Booking with ID {} not found", id)),
        BookingError::Internal(msg) => AppError::Internal(msg),
    }
}

/// List all airport bookings
pub async fn get_airport_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<AirportBookingResponse>>, AppError> {
    let bookings = state
        .booking_service
        .get_airport_bookings()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(
        bookings
            .into_iter()
            .map(AirportBookingResponse::from)
            .collect(),
    ))
}

/// Get an airport booking by ID
pub async fn get_airport_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AirportBookingResponse>, AppError> {
    let id = BookingId::new(id);

    let booking = state
        .booking_service
        .get_airport_booking(&id)
        .await
        .map_err(|e| map_error(e, &id))?;

    Ok(Json(AirportBookingResponse::from(booking)))
}

/// Create a new airport booking
pub async fn create_airport_booking(
    State(state): State<AppState>,
    Json(body): Json<AirportBookingRequest>,
) -> Result<(StatusCode, Json<AirportBookingCreatedResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let booking = state
        .booking_service
        .create_airport_booking(mappers::airport_booking_from_request(body))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Persisted already; notification failures are logged, not surfaced.
    if let Err(e) = state
        .email_service
        .send_airport_booking_confirmation(&booking)
        .await
    {
        tracing::error!(id = %booking.id, "Failed to send confirmation emails: {}", e);
    }

    Ok((
        StatusCode::CREATED,
        Json(AirportBookingCreatedResponse {
            message: "Airport booking created successfully.".into(),
            booking: AirportBookingResponse::from(booking),
        }),
    ))
}

/// Replace an airport booking
pub async fn update_airport_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AirportBookingRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let id = BookingId::new(id);
    let booking = mappers::airport_booking_from_request(body).with_id(id.clone());

    state
        .booking_service
        .update_airport_booking(booking.clone())
        .await
        .map_err(|e| map_error(e, &id))?;

    if let Err(e) = state
        .email_service
        .send_airport_status_update(&booking)
        .await
    {
        tracing::error!(id = %id, "Failed to send status update emails: {}", e);
    }

    Ok(Json(MessageResponse::new(
        "Airport booking updated successfully.",
    )))
}

/// Delete an airport booking
pub async fn delete_airport_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = BookingId::new(id);

    state
        .booking_service
        .delete_airport_booking(&id)
        .await
        .map_err(|e| map_error(e, &id))?;

    Ok(Json(MessageResponse::new(
        "Airport booking deleted successfully.",
    )))
}
