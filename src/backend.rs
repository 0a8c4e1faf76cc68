use crate::types::{Booking, BookingRecord};
use uuid::Uuid;

/// Failure reported by a [`BookingBackend`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write itself hit an existing booking for the same (date, time).
    #[error("a booking already exists for this slot")]
    SlotTaken,
    #[error("{0}")]
    Database(String),
}

pub trait BookingBackend: Clone + Send + Sync + 'static {
    /// All bookings stored for the given day.
    fn bookings_on(&self, day: &str) -> Result<Vec<BookingRecord>, StoreError>;

    /// Whether a booking already exists for the given (day, slot) pair.
    fn slot_taken(&self, day: &str, slot: &str) -> Result<bool, StoreError>;

    /// Persists a booking and returns its generated identifier. The write
    /// enforces the unique (date, time) key and rejects duplicates with
    /// [`StoreError::SlotTaken`].
    fn insert_booking(&self, booking: Booking) -> Result<Uuid, StoreError>;

    /// Connectivity probe for the status endpoint.
    fn ping(&self) -> Result<(), StoreError>;
}
