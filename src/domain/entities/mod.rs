//! # Domain Entities
//!
//! Core domain entities for the booking backend. Each persisted entity maps
//! directly to its database table and carries a repository trait implemented
//! in the infrastructure layer.
//!
//! ## Entities
//!
//! - **Booking**: A standard point-to-point ride request
//! - **AirportBooking**: A transfer to/from an airport, optionally round-trip
//! - **ContactMessage**: A contact-form query (send-only, never persisted)

mod airport_booking;
mod booking;
mod contact;

// Re-export Booking entity and related types
pub use booking::{Booking, BookingRepository, BookingStatus, NewBooking};

// Re-export AirportBooking entity and related types
pub use airport_booking::{AirportBooking, AirportBookingRepository, NewAirportBooking};

// Re-export ContactMessage
pub use contact::ContactMessage;
