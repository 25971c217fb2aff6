//! # Taxi Booking Server Library
//!
//! This crate provides the booking backend for a taxi company with:
//! - RESTful HTTP API for standard bookings, airport transfers and
//!   contact-us submissions
//! - PostgreSQL for persistent storage
//! - SMTP notifications to customers and the business address
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and repository traits
//! - **Application Layer**: Business logic services, DTOs and mappers
//! - **Infrastructure Layer**: Database, repository and email implementations
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! taxi_booking_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities, value objects, and traits
//! +-- application/   Application services, DTOs and mappers
//! +-- infrastructure/ Database, repository and email implementations
//! +-- presentation/  HTTP routes, handlers and middleware
//! +-- shared/        Common utilities (errors, validation, datetime)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
