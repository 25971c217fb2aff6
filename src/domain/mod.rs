//! # Domain Layer
//!
//! The domain layer contains the core business model of the booking backend.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Booking, AirportBooking, ContactMessage)
//! - **value_objects**: Immutable value types (BookingId)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Identifiers stay opaque above the persistence layer

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
