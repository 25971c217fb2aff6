//! Infrastructure Layer
//!
//! Contains the concrete integrations with external systems: the PostgreSQL
//! database, the repository implementations and the SMTP email transport.

pub mod database;
pub mod email;
pub mod repositories;
