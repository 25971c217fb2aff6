//! Booking Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::BookingRequest;
use crate::application::dto::response::{BookingCreatedResponse, BookingResponse, MessageResponse};
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

/// List all bookings
pub async fn get_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state
        .booking_service
        .get_bookings()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    ))
}

/// Get a booking by ID
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let id = BookingId::new(id);

    let booking = state
        .booking_service
        .get_booking(&id)
        .await
        .map_err(|e| map_error(e, &id))?;

    Ok(Json(BookingResponse::from(booking)))
}

/// Create a new booking
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let booking = state
        .booking_service
        .create_booking(mappers::booking_from_request(body))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // The record is persisted at this point; a notification failure must not
    // undo that, so it is logged and the success response stands.
    if let Err(e) = state
        .email_service
        .send_booking_confirmation(&booking)
        .await
    {
        tracing::error!(id = %booking.id, "Failed to send confirmation emails: {}", e);
    }

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking created successfully.".into(),
            booking: BookingResponse::from(booking),
        }),
    ))
}

/// Replace a booking
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<BookingRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let id = BookingId::new(id);
    let booking = mappers::booking_from_request(body).with_id(id.clone());

    state
        .booking_service
        .update_booking(booking.clone())
        .await
        .map_err(|e| map_error(e, &id))?;

    if let Err(e) = state
        .email_service
        .send_booking_status_update(&booking)
        .await
    {
        tracing::error!(id = %id, "Failed to send status update emails: {}", e);
    }

    Ok(Json(MessageResponse::new("Booking updated successfully.")))
}

/// Delete a booking
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = BookingId::new(id);

    state
        .booking_service
        .delete_booking(&id)
        .await
        .map_err(|e| map_error(e, &id))?;

    Ok(Json(MessageResponse::new("Booking deleted successfully.")))
}
