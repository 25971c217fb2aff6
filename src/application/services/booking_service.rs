//! Booking Service
//!
//! Orchestrates booking lifecycle operations for both booking families.
//! Every method wraps exactly one repository call; adapter failures are
//! logged and folded into a uniform service error so callers only ever see
//! "not found" or "internal".

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    AirportBooking, AirportBookingRepository, Booking, BookingId, BookingRepository,
    NewAirportBooking, NewBooking,
};
use crate::shared::error::AppError;

/// Booking service errors.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for BookingError {
    fn from(err: AppError) -> Self {
        tracing::error!("Repository failure: {}", err);
        BookingError::Internal(err.to_string())
    }
}

/// Booking service trait covering both entity families.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// List all standard bookings, ordered by identifier ascending.
    async fn get_bookings(&self) -> Result<Vec<Booking>, BookingError>;

    /// Fetch a standard booking by id.
    async fn get_booking(&self, id: &BookingId) -> Result<Booking, BookingError>;

    /// Persist a new standard booking.
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, BookingError>;

    /// Replace a stored standard booking; the caller sets the target id.
    async fn update_booking(&self, booking: Booking) -> Result<(), BookingError>;

    /// Delete a standard booking by id.
    async fn delete_booking(&self, id: &BookingId) -> Result<(), BookingError>;

    /// List all airport bookings, ordered by identifier ascending.
    async fn get_airport_bookings(&self) -> Result<Vec<AirportBooking>, BookingError>;

    /// Fetch an airport booking by id.
    async fn get_airport_booking(&self, id: &BookingId) -> Result<AirportBooking, BookingError>;

    /// Persist a new airport booking.
    async fn create_airport_booking(
        &self,
        booking: NewAirportBooking,
    ) -> Result<AirportBooking, BookingError>;

    /// Replace a stored airport booking; the caller sets the target id.
    async fn update_airport_booking(&self, booking: AirportBooking) -> Result<(), BookingError>;

    /// Delete an airport booking by id.
    async fn delete_airport_booking(&self, id: &BookingId) -> Result<(), BookingError>;
}

/// Booking service implementation, generic over both repositories.
pub struct BookingServiceImpl<B, A>
where
    B: BookingRepository,
    A: AirportBookingRepository,
{
    booking_repo: Arc<B>,
    airport_repo: Arc<A>,
}

impl<B, A> BookingServiceImpl<B, A>
where
    B: BookingRepository,
    A: AirportBookingRepository,
{
    /// Create a new BookingServiceImpl.
    pub fn new(booking_repo: Arc<B>, airport_repo: Arc<A>) -> Self {
        Self {
            booking_repo,
            airport_repo,
        }
    }
}

#[async_trait]
impl<B, A> BookingService for BookingServiceImpl<B, A>
where
    B: BookingRepository + 'static,
    A: AirportBookingRepository + 'static,
{
    async fn get_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        tracing::debug!("Fetching all bookings");
        Ok(self.booking_repo.list().await?)
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking, BookingError> {
        tracing::debug!(id = %id, "Fetching booking");
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or(BookingError::NotFound)
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, BookingError> {
        let created = self.booking_repo.create(&booking).await?;
        tracing::info!(id = %created.id, "Booking created");
        Ok(created)
    }

    async fn update_booking(&self, booking: Booking) -> Result<(), BookingError> {
        if self.booking_repo.update(&booking).await? {
            tracing::info!(id = %booking.id, status = %booking.status, "Booking updated");
            Ok(())
        } else {
            tracing::warn!(id = %booking.id, "Booking not found for update");
            Err(BookingError::NotFound)
        }
    }

    async fn delete_booking(&self, id: &BookingId) -> Result<(), BookingError> {
        if self.booking_repo.delete(id).await? {
            tracing::info!(id = %id, "Booking deleted");
            Ok(())
        } else {
            tracing::warn!(id = %id, "Booking not found for delete");
            Err(BookingError::NotFound)
        }
    }

    async fn get_airport_bookings(&self) -> Result<Vec<AirportBooking>, BookingError> {
        tracing::debug!("Fetching all airport bookings");
        Ok(self.airport_repo.list().await?)
    }

    async fn get_airport_booking(&self, id: &BookingId) -> Result<AirportBooking, BookingError> {
        tracing::debug!(id = %id, "Fetching airport booking");
        self.airport_repo
            .find_by_id(id)
            .await?
            .ok_or(BookingError::NotFound)
    }

    async fn create_airport_booking(
        &self,
        booking: NewAirportBooking,
    ) -> Result<AirportBooking, BookingError> {
        let created = self.airport_repo.create(&booking).await?;
        tracing::info!(id = %created.id, "Airport booking created");
        Ok(created)
    }

    async fn update_airport_booking(&self, booking: AirportBooking) -> Result<(), BookingError> {
        if self.airport_repo.update(&booking).await? {
            tracing::info!(id = %booking.id, status = %booking.status, "Airport booking updated");
            Ok(())
        } else {
            tracing::warn!(id = %booking.id, "Airport booking not found for update");
            Err(BookingError::NotFound)
        }
    }

    async fn delete_airport_booking(&self, id: &BookingId) -> Result<(), BookingError> {
        if self.airport_repo.delete(id).await? {
            tracing::info!(id = %id, "Airport booking deleted");
            Ok(())
        } else {
            tracing::warn!(id = %id, "Airport booking not found for delete");
            Err(BookingError::NotFound)
        }
    }
}
