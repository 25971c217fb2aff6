//! Airport Booking Repository Implementation
//!
//! PostgreSQL implementation of airport transfer persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    AirportBooking, AirportBookingRepository, BookingId, BookingStatus, NewAirportBooking,
};
use crate::shared::error::AppError;

/// Row shape for the `airport_bookings` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct AirportBookingRow {
    id: i32,
    name: String,
    email: String,
    phone_number: String,
    pickup_location: String,
    airport_name: String,
    pickup_date: DateTime<Utc>,
    pickup_time: String,
    special_requests: Option<String>,
    is_return_trip: bool,
    return_date: Option<DateTime<Utc>>,
    return_time: Option<String>,
    status: String,
}

impl From<AirportBookingRow> for AirportBooking {
    fn from(row: AirportBookingRow) -> Self {
        AirportBooking {
            id: BookingId::from(row.id),
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            pickup_location: row.pickup_location,
            airport_name: row.airport_name,
            pickup_date: row.pickup_date,
            pickup_time: row.pickup_time,
            special_requests: row.special_requests,
            is_return_trip: row.is_return_trip,
            return_date: row.return_date,
            return_time: row.return_time,
            status: BookingStatus::from_str(&row.status),
        }
    }
}

fn parse_id(id: &BookingId) -> Option<i32> {
    id.as_str().parse().ok()
}

const COLUMNS: &str = "id, name, email, phone_number, pickup_location, airport_name, \
                       pickup_date, pickup_time, special_requests, is_return_trip, \
                       return_date, return_time, status";

/// PostgreSQL implementation of the AirportBookingRepository.
pub struct PgAirportBookingRepository {
    pool: PgPool,
}

impl PgAirportBookingRepository {
    /// Creates a new PgAirportBookingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AirportBookingRepository for PgAirportBookingRepository {
    async fn list(&self) -> Result<Vec<AirportBooking>, AppError> {
        let rows = sqlx::query_as::<_, AirportBookingRow>(&format!(
            "SELECT {} FROM airport_bookings ORDER BY id ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AirportBooking::from).collect())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<AirportBooking>, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, AirportBookingRow>(&format!(
            "SELECT {} FROM airport_bookings WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AirportBooking::from))
    }

    async fn create(&self, booking: &NewAirportBooking) -> Result<AirportBooking, AppError> {
        let row = sqlx::query_as::<_, AirportBookingRow>(&format!(
            r#"
            INSERT INTO airport_bookings (name, email, phone_number, pickup_location,
                                          airport_name, pickup_date, pickup_time,
                                          special_requests, is_return_trip,
                                          return_date, return_time, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone_number)
        .bind(&booking.pickup_location)
        .bind(&booking.airport_name)
        .bind(booking.pickup_date)
        .bind(&booking.pickup_time)
        .bind(&booking.special_requests)
        .bind(booking.is_return_trip)
        .bind(booking.return_date)
        .bind(&booking.return_time)
        .bind(booking.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(AirportBooking::from(row))
    }

    async fn update(&self, booking: &AirportBooking) -> Result<bool, AppError> {
        let Some(id) = parse_id(&booking.id) else {
            return Ok(false);
        };

        let result = sqlx::query(
            r#"
            UPDATE airport_bookings
            SET name = $1, email = $2, phone_number = $3, pickup_location = $4,
                airport_name = $5, pickup_date = $6, pickup_time = $7,
                special_requests = $8, is_return_trip = $9,
                return_date = $10, return_time = $11, status = $12
            WHERE id = $13
            "#,
        )
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone_number)
        .bind(&booking.pickup_location)
        .bind(&booking.airport_name)
        .bind(booking.pickup_date)
        .bind(&booking.pickup_time)
        .bind(&booking.special_requests)
        .bind(booking.is_return_trip)
        .bind(booking.return_date)
        .bind(&booking.return_time)
        .bind(booking.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &BookingId) -> Result<bool, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM airport_bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_preserves_return_leg() {
        let row = AirportBookingRow {
            id: 3,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone_number: "123".into(),
            pickup_location: "A".into(),
            airport_name: "Heathrow".into(),
            pickup_date: Utc::now(),
            pickup_time: "06:15".into(),
            special_requests: None,
            is_return_trip: true,
            return_date: Some(Utc::now()),
            return_time: Some("18:00".into()),
            status: "pending".into(),
        };

        let booking = AirportBooking::from(row);
        assert_eq!(booking.id, BookingId::from(3));
        assert!(booking.is_return_trip);
        assert!(booking.has_consistent_return_leg());
    }

    #[test]
    fn test_parse_id_rejects_document_store_ids() {
        assert_eq!(parse_id(&BookingId::new("65f1a2b3c4d5e6f708192a3b")), None);
    }
}
