//! Airport transfer entity and repository trait.
//!
//! Maps to the `airport_bookings` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::booking::BookingStatus;
use crate::domain::value_objects::BookingId;
use crate::shared::error::AppError;

/// A booking to or from an airport, optionally with a return leg.
///
/// Maps to the `airport_bookings` table:
/// - id: SERIAL PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - email: VARCHAR(150) NOT NULL
/// - phone_number: VARCHAR(15) NOT NULL
/// - pickup_location: VARCHAR(250) NOT NULL
/// - airport_name: VARCHAR(150) NOT NULL
/// - pickup_date: TIMESTAMPTZ NOT NULL (UTC)
/// - pickup_time: VARCHAR(5) NOT NULL -- HH:mm text
/// - special_requests: VARCHAR(250) NULL
/// - is_return_trip: BOOLEAN NOT NULL
/// - return_date: TIMESTAMPTZ NULL -- present only for return trips
/// - return_time: VARCHAR(5) NULL
/// - status: VARCHAR(20) NOT NULL DEFAULT 'pending'
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportBooking {
    /// Backend-assigned identifier
    pub id: BookingId,

    /// Customer name
    pub name: String,

    /// Customer email address
    pub email: String,

    /// Customer phone number
    pub phone_number: String,

    /// Pickup address
    pub pickup_location: String,

    /// Destination (or origin) airport
    pub airport_name: String,

    /// Outbound pickup date, normalized to UTC
    pub pickup_date: DateTime<Utc>,

    /// Outbound pickup time as validated HH:mm text
    pub pickup_time: String,

    /// Free-text requests
    pub special_requests: Option<String>,

    /// Whether a return leg was booked
    pub is_return_trip: bool,

    /// Return pickup date (None for one-way trips)
    pub return_date: Option<DateTime<Utc>>,

    /// Return pickup time (None for one-way trips)
    pub return_time: Option<String>,

    /// Lifecycle status
    pub status: BookingStatus,
}

impl AirportBooking {
    /// A return trip must carry both return fields; one-way trips carry neither.
    pub fn has_consistent_return_leg(&self) -> bool {
        if self.is_return_trip {
            self.return_date.is_some() && self.return_time.is_some()
        } else {
            self.return_date.is_none() && self.return_time.is_none()
        }
    }
}

/// Input for creating an airport booking, before an identifier exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAirportBooking {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub pickup_location: String,
    pub airport_name: String,
    pub pickup_date: DateTime<Utc>,
    pub pickup_time: String,
    pub special_requests: Option<String>,
    pub is_return_trip: bool,
    pub return_date: Option<DateTime<Utc>>,
    pub return_time: Option<String>,
    pub status: BookingStatus,
}

impl NewAirportBooking {
    /// Attach a backend-assigned identifier to produce the stored entity.
    pub fn with_id(self, id: BookingId) -> AirportBooking {
        AirportBooking {
            id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            pickup_location: self.pickup_location,
            airport_name: self.airport_name,
            pickup_date: self.pickup_date,
            pickup_time: self.pickup_time,
            special_requests: self.special_requests,
            is_return_trip: self.is_return_trip,
            return_date: self.return_date,
            return_time: self.return_time,
            status: self.status,
        }
    }
}

/// Repository trait for AirportBooking data access operations.
#[async_trait]
pub trait AirportBookingRepository: Send + Sync {
    /// List all airport bookings ordered by identifier ascending.
    async fn list(&self) -> Result<Vec<AirportBooking>, AppError>;

    /// Find an airport booking by its identifier.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<AirportBooking>, AppError>;

    /// Persist a new airport booking and return it with its assigned identifier.
    async fn create(&self, booking: &NewAirportBooking) -> Result<AirportBooking, AppError>;

    /// Replace a stored airport booking. Returns false when no record matches.
    async fn update(&self, booking: &AirportBooking) -> Result<bool, AppError>;

    /// Delete an airport booking by id. Returns false when no record matches.
    async fn delete(&self, id: &BookingId) -> Result<bool, AppError>;
}
