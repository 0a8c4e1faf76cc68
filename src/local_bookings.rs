use crate::backend::{BookingBackend, StoreError};
use crate::types::{Booking, BookingRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::error;
use uuid::Uuid;

/// Keeps bookings in process memory. Used when no database is configured;
/// all records are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<HashMap<Uuid, BookingRecord>>>,
}

impl BookingBackend for LocalBookings {
    fn bookings_on(&self, day: &str) -> Result<Vec<BookingRecord>, StoreError> {
        let bookings = self.bookings.lock().unwrap();
        let mut matching: Vec<BookingRecord> = bookings
            .values()
            .filter(|record| record.booking.date == day)
            .cloned()
            .collect();
        matching.sort_unstable_by(|a, b| a.booking.time.cmp(&b.booking.time));
        Ok(matching)
    }

    fn slot_taken(&self, day: &str, slot: &str) -> Result<bool, StoreError> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .values()
            .any(|record| record.booking.date == day && record.booking.time == slot))
    }

    fn insert_booking(&self, booking: Booking) -> Result<Uuid, StoreError> {
        // Check and insert under the same lock, so the unique (date, time)
        // key holds even for concurrent submissions.
        let mut bookings = self.bookings.lock().unwrap();
        let duplicate = bookings
            .values()
            .any(|record| record.booking.date == booking.date && record.booking.time == booking.time);
        if duplicate {
            error!(date = %booking.date, time = %booking.time, "slot already booked");
            return Err(StoreError::SlotTaken);
        }

        let id = Uuid::new_v4();
        bookings.insert(id, BookingRecord { id, booking });
        Ok(id)
    }

    fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
