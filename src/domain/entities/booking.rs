//! Booking entity and repository trait.
//!
//! Maps to the `bookings` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BookingId;
use crate::shared::error::AppError;

/// Lifecycle state shared by standard and airport bookings.
///
/// Stored as its lowercase string form; unknown stored values read back as
/// pending rather than failing old rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Initial state for every new booking
    #[default]
    Pending,
    /// Confirmed by the business
    Accepted,
    /// Rejected by the business
    Declined,
}

impl BookingStatus {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "accepted" => Self::Accepted,
            "declined" => Self::Declined,
            _ => Self::Pending,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A standard point-to-point ride request.
///
/// Maps to the `bookings` table:
/// - id: SERIAL PRIMARY KEY
/// - date: TIMESTAMPTZ NOT NULL (date-only semantics, UTC)
/// - time: VARCHAR(5) NOT NULL -- free-text HH:mm, validated, never parsed
/// - pickup_location: VARCHAR(250) NOT NULL
/// - drop_off_location: VARCHAR(250) NOT NULL
/// - name: VARCHAR(100) NOT NULL
/// - email: VARCHAR(150) NOT NULL
/// - phone_number: VARCHAR(15) NOT NULL
/// - special_requests: VARCHAR(250) NULL
/// - status: VARCHAR(20) NOT NULL DEFAULT 'pending'
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Backend-assigned identifier
    pub id: BookingId,

    /// Scheduled date, normalized to UTC at the API boundary
    pub date: DateTime<Utc>,

    /// Scheduled time as validated HH:mm text
    pub time: String,

    /// Pickup address
    pub pickup_location: String,

    /// Drop-off address
    pub drop_off_location: String,

    /// Customer name
    pub name: String,

    /// Customer email address
    pub email: String,

    /// Customer phone number
    pub phone_number: String,

    /// Free-text requests (child seat, luggage, ...)
    pub special_requests: Option<String>,

    /// Lifecycle status
    pub status: BookingStatus,
}

/// Input for creating a booking, before an identifier exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub date: DateTime<Utc>,
    pub time: String,
    pub pickup_location: String,
    pub drop_off_location: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
}

impl NewBooking {
    /// Attach a backend-assigned identifier to produce the stored entity.
    pub fn with_id(self, id: BookingId) -> Booking {
        Booking {
            id,
            date: self.date,
            time: self.time,
            pickup_location: self.pickup_location,
            drop_off_location: self.drop_off_location,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            special_requests: self.special_requests,
            status: self.status,
        }
    }
}

/// Repository trait for Booking data access operations.
///
/// Implementations own identifier semantics: a malformed id yields a
/// not-found result, never a parse error.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// List all bookings ordered by identifier ascending.
    async fn list(&self) -> Result<Vec<Booking>, AppError>;

    /// Find a booking by its identifier.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, AppError>;

    /// Persist a new booking and return it with its assigned identifier.
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;

    /// Replace a stored booking. Returns false when no record matches the id.
    async fn update(&self, booking: &Booking) -> Result<bool, AppError>;

    /// Delete a booking by id. Returns false when no record matches.
    async fn delete(&self, id: &BookingId) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(BookingStatus::from_str("pending"), BookingStatus::Pending);
        assert_eq!(BookingStatus::from_str("accepted"), BookingStatus::Accepted);
        assert_eq!(BookingStatus::from_str("ACCEPTED"), BookingStatus::Accepted);
        assert_eq!(BookingStatus::from_str("declined"), BookingStatus::Declined);
    }

    #[test]
    fn test_status_from_str_unknown_defaults_to_pending() {
        assert_eq!(BookingStatus::from_str(""), BookingStatus::Pending);
        assert_eq!(BookingStatus::from_str("cancelled"), BookingStatus::Pending);
    }

    #[test]
    fn test_status_as_str_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Accepted,
            BookingStatus::Declined,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_new_booking_with_id_copies_all_fields() {
        let new = NewBooking {
            date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            time: "14:30".into(),
            pickup_location: "A".into(),
            drop_off_location: "B".into(),
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone_number: "123".into(),
            special_requests: Some("child seat".into()),
            status: BookingStatus::Pending,
        };

        let booking = new.clone().with_id(BookingId::from(1));

        assert_eq!(booking.id, BookingId::from(1));
        assert_eq!(booking.date, new.date);
        assert_eq!(booking.time, new.time);
        assert_eq!(booking.pickup_location, new.pickup_location);
        assert_eq!(booking.drop_off_location, new.drop_off_location);
        assert_eq!(booking.name, new.name);
        assert_eq!(booking.email, new.email);
        assert_eq!(booking.phone_number, new.phone_number);
        assert_eq!(booking.special_requests, new.special_requests);
        assert_eq!(booking.status, new.status);
    }

    #[test]
    fn test_booking_serializes_status_lowercase() {
        let booking = NewBooking {
            date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            time: "09:00".into(),
            pickup_location: "A".into(),
            drop_off_location: "B".into(),
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone_number: "123".into(),
            special_requests: None,
            status: BookingStatus::Accepted,
        }
        .with_id(BookingId::from(3));

        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"status\":\"accepted\""));
        assert!(json.contains("\"id\":\"3\""));
    }
}
