//! Repository Implementations
//!
//! Concrete persistence backends for the domain repository traits: the
//! PostgreSQL backend used in production and an in-memory document-style
//! backend used for tests and local runs without a database.

pub mod memory;
pub mod pg_airport_booking_repository;
pub mod pg_booking_repository;

pub use memory::{MemoryAirportBookingRepository, MemoryBookingRepository};
pub use pg_airport_booking_repository::PgAirportBookingRepository;
pub use pg_booking_repository::PgBookingRepository;
