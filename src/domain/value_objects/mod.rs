//! Value Objects
//!
//! Immutable value types shared across the domain.

mod booking_id;

pub use booking_id::BookingId;
