//! Opaque booking identifier.
//!
//! The relational backend assigns auto-increment integers and the document
//! backend assigns hex object ids, so the service layer treats identifiers as
//! opaque strings. Backend-specific parsing lives inside each repository;
//! nothing above the persistence layer may compute on an id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned booking identifier, carried as its string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Wrap an identifier already rendered as a string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The identifier's string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i32> for BookingId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
