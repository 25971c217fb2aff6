//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **BookingService**: Lifecycle operations for both booking families
//! - **EmailService**: Confirmation and status-update email dispatch

pub mod booking_service;
pub mod email_service;

// Re-export booking service types
pub use booking_service::{BookingError, BookingService, BookingServiceImpl};

// Re-export email service types
pub use email_service::{EmailError, EmailService, EmailServiceImpl, Mailer};
