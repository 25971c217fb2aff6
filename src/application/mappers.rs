//! Request-to-Entity Mapping
//!
//! Explicit, total, side-effect-free conversion functions, one per
//! (request shape, entity shape) pair. Pure passthrough copies; the only
//! derived value is the default pending status when none was supplied.
//! Requests are assumed to have passed validation before mapping.

use crate::application::dto::request::{AirportBookingRequest, BookingRequest, ContactUsRequest};
use crate::domain::{ContactMessage, NewAirportBooking, NewBooking};

/// Map a validated booking request to a new booking entity.
pub fn booking_from_request(request: BookingRequest) -> NewBooking {
    NewBooking {
        date: request.date,
        time: request.time,
        pickup_location: request.pickup_location,
        drop_off_location: request.drop_off_location,
        name: request.name,
        email: request.email,
        phone_number: request.phone_number,
        special_requests: request.special_requests,
        status: request.status.unwrap_or_default(),
    }
}

/// Map a validated airport booking request to a new airport booking entity.
pub fn airport_booking_from_request(request: AirportBookingRequest) -> NewAirportBooking {
    NewAirportBooking {
        name: request.name,
        email: request.email,
        phone_number: request.phone_number,
        pickup_location: request.pickup_location,
        airport_name: request.airport_name,
        pickup_date: request.pickup_date,
        pickup_time: request.pickup_time,
        special_requests: request.special_requests,
        is_return_trip: request.is_return_trip,
        return_date: request.return_date,
        return_time: request.return_time,
        status: request.status.unwrap_or_default(),
    }
}

/// Map a validated contact request to a contact message.
pub fn contact_from_request(request: ContactUsRequest) -> ContactMessage {
    ContactMessage {
        name: request.name,
        email: request.email,
        message: request.message,
    }
}
