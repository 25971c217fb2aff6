//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{AirportBooking, Booking, ContactMessage};

/// Generic message envelope for update/delete outcomes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standard booking as returned over the wire
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub date: String,
    pub time: String,
    pub pickup_location: String,
    pub drop_off_location: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub special_requests: Option<String>,
    pub status: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            date: booking.date.to_rfc3339(),
            time: booking.time,
            pickup_location: booking.pickup_location,
            drop_off_location: booking.drop_off_location,
            name: booking.name,
            email: booking.email,
            phone_number: booking.phone_number,
            special_requests: booking.special_requests,
            status: booking.status.as_str().to_string(),
        }
    }
}

/// Airport booking as returned over the wire
#[derive(Debug, Serialize)]
pub struct AirportBookingResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub pickup_location: String,
    pub airport_name: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub special_requests: Option<String>,
    pub is_return_trip: bool,
    pub return_date: Option<String>,
    pub return_time: Option<String>,
    pub status: String,
}

impl From<AirportBooking> for AirportBookingResponse {
    fn from(booking: AirportBooking) -> Self {
        Self {
            id: booking.id.to_string(),
            name: booking.name,
            email: booking.email,
            phone_number: booking.phone_number,
            pickup_location: booking.pickup_location,
            airport_name: booking.airport_name,
            pickup_date: booking.pickup_date.to_rfc3339(),
            pickup_time: booking.pickup_time,
            special_requests: booking.special_requests,
            is_return_trip: booking.is_return_trip,
            return_date: booking.return_date.map(|d| d.to_rfc3339()),
            return_time: booking.return_time,
            status: booking.status.as_str().to_string(),
        }
    }
}

/// Envelope returned after a successful booking creation
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking: BookingResponse,
}

/// Envelope returned after a successful airport booking creation
#[derive(Debug, Serialize)]
pub struct AirportBookingCreatedResponse {
    pub message: String,
    pub booking: AirportBookingResponse,
}

/// Envelope returned after a contact-us submission
#[derive(Debug, Serialize)]
pub struct ContactUsResponse {
    pub message: String,
    pub contact: ContactMessage,
}
