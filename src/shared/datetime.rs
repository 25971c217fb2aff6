//! UTC Date Normalization
//!
//! Booking dates arrive from frontends in several shapes: a bare date, a bare
//! date-time, or an RFC 3339 timestamp with an offset. Values carrying an
//! offset are converted to their UTC instant; values without one are taken as
//! already UTC, clock value unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a date string into a UTC timestamp.
///
/// Accepted shapes, tried in order:
/// - RFC 3339 with offset (`2025-06-01T14:30:00+02:00`) - converted to UTC
/// - Bare date-time (`2025-06-01T14:30:00`) - interpreted as UTC
/// - Bare date (`2025-06-01`) - midnight UTC
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
        return Ok(Utc.from_utc_datetime(&midnight));
    }

    Err(format!("Invalid date format: {}", value))
}

/// Serde deserializer for required date fields.
pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_utc(&value).map_err(serde::de::Error::custom)
}

/// Serde deserializer for optional date fields.
pub fn deserialize_utc_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        Some(s) => parse_utc(&s).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
