//! Booking Repository Implementation
//!
//! PostgreSQL implementation of standard booking persistence. Identifiers are
//! auto-increment integers; the opaque string ids used above this layer are
//! parsed here and nowhere else.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Booking, BookingId, BookingRepository, BookingStatus, NewBooking};
use crate::shared::error::AppError;

/// Row shape for the `bookings` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct BookingRow {
    id: i32,
    date: DateTime<Utc>,
    time: String,
    pickup_location: String,
    drop_off_location: String,
    name: String,
    email: String,
    phone_number: String,
    special_requests: Option<String>,
    status: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: BookingId::from(row.id),
            date: row.date,
            time: row.time,
            pickup_location: row.pickup_location,
            drop_off_location: row.drop_off_location,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            special_requests: row.special_requests,
            status: BookingStatus::from_str(&row.status),
        }
    }
}

/// Opaque ids must parse as integers for this backend; anything else is
/// treated as referring to no record.
fn parse_id(id: &BookingId) -> Option<i32> {
    id.as_str().parse().ok()
}

const COLUMNS: &str = "id, date, time, pickup_location, drop_off_location, \
                       name, email, phone_number, special_requests, status";

/// PostgreSQL implementation of the BookingRepository.
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Creates a new PgBookingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings ORDER BY id ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Booking::from))
    }

    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            INSERT INTO bookings (date, time, pickup_location, drop_off_location,
                                  name, email, phone_number, special_requests, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(booking.date)
        .bind(&booking.time)
        .bind(&booking.pickup_location)
        .bind(&booking.drop_off_location)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone_number)
        .bind(&booking.special_requests)
        .bind(booking.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(Booking::from(row))
    }

    async fn update(&self, booking: &Booking) -> Result<bool, AppError> {
        let Some(id) = parse_id(&booking.id) else {
            return Ok(false);
        };

        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET date = $1, time = $2, pickup_location = $3, drop_off_location = $4,
                name = $5, email = $6, phone_number = $7, special_requests = $8, status = $9
            WHERE id = $10
            "#,
        )
        .bind(booking.date)
        .bind(&booking.time)
        .bind(&booking.pickup_location)
        .bind(&booking.drop_off_location)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone_number)
        .bind(&booking.special_requests)
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

        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
