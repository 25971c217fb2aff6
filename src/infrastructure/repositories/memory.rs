//! In-Memory Document Store Repositories
//!
//! Document-style backend keeping records in process memory, keyed by
//! 24-char hex object ids (timestamp, machine token, counter) so identifiers
//! sort by creation order. Serves as the second interchangeable persistence
//! backend and backs the service and route tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rand::Rng;

use crate::domain::{
    AirportBooking, AirportBookingRepository, Booking, BookingId, BookingRepository,
    NewAirportBooking, NewBooking,
};
use crate::shared::error::AppError;

/// Object ids are exactly 24 lowercase hex characters; anything else refers
/// to no record in this backend.
fn is_valid_object_id(id: &BookingId) -> bool {
    let s = id.as_str();
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Generates monotonically increasing object ids for one store instance.
struct ObjectIdGenerator {
    machine: u64,
    counter: AtomicU32,
}

impl ObjectIdGenerator {
    fn new() -> Self {
        Self {
            machine: rand::rng().random::<u64>() & 0xff_ffff_ffff,
            counter: AtomicU32::new(0),
        }
    }

    fn next(&self) -> BookingId {
        let timestamp = Utc::now().timestamp() as u32;
        let count = self.counter.fetch_add(1, Ordering::SeqCst) & 0xff_ffff;
        BookingId::new(format!("{:08x}{:010x}{:06x}", timestamp, self.machine, count))
    }
}

/// In-memory implementation of the BookingRepository.
pub struct MemoryBookingRepository {
    records: Mutex<BTreeMap<String, Booking>>,
    ids: ObjectIdGenerator,
}

impl MemoryBookingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            ids: ObjectIdGenerator::new(),
        }
    }
}

impl Default for MemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.records.lock().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, AppError> {
        if !is_valid_object_id(id) {
            return Ok(None);
        }
        Ok(self.records.lock().get(id.as_str()).cloned())
    }

    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        let created = booking.clone().with_id(self.ids.next());
        self.records
            .lock()
            .insert(created.id.to_string(), created.clone());
        Ok(created)
    }

    async fn update(&self, booking: &Booking) -> Result<bool, AppError> {
        if !is_valid_object_id(&booking.id) {
            return Ok(false);
        }
        let mut records = self.records.lock();
        match records.get_mut(booking.id.as_str()) {
            Some(existing) => {
                *existing = booking.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &BookingId) -> Result<bool, AppError> {
        if !is_valid_object_id(id) {
            return Ok(false);
        }
        Ok(self.records.lock().remove(id.as_str()).is_some())
    }
}

/// In-memory implementation of the AirportBookingRepository.
pub struct MemoryAirportBookingRepository {
    records: Mutex<BTreeMap<String, AirportBooking>>,
    ids: ObjectIdGenerator,
}

impl MemoryAirportBookingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            ids: ObjectIdGenerator::new(),
        }
    }
}

impl Default for MemoryAirportBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AirportBookingRepository for MemoryAirportBookingRepository {
    async fn list(&self) -> Result<Vec<AirportBooking>, AppError> {
        Ok(self.records.lock().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<AirportBooking>, AppError> {
        if !is_valid_object_id(id) {
            return Ok(None);
        }
        Ok(self.records.lock().get(id.as_str()).cloned())
    }

    async fn create(&self, booking: &NewAirportBooking) -> Result<AirportBooking, AppError> {
        let created = booking.clone().with_id(self.ids.next());
        self.records
            .lock()
            .insert(created.id.to_string(), created.clone());
        Ok(created)
    }

    async fn update(&self, booking: &AirportBooking) -> Result<bool, AppError> {
        if !is_valid_object_id(&booking.id) {
            return Ok(false);
        }
        let mut records = self.records.lock();
        match records.get_mut(booking.id.as_str()) {
            Some(existing) => {
                *existing = booking.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &BookingId) -> Result<bool, AppError> {
        if !is_valid_object_id(id) {
            return Ok(false);
        }
        Ok(self.records.lock().remove(id.as_str()).is_some())
    }
}
