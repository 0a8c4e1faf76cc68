use crate::backend::{BookingBackend, StoreError};
use crate::calendar::{self, TIME_SLOTS};
use crate::error::BookingError;
use crate::types::Booking;
use std::collections::HashSet;
use tracing::{error, info};
use uuid::Uuid;

/// Runs the availability and booking rules on top of a [`BookingBackend`].
#[derive(Clone)]
pub struct BookingScheduler<T: BookingBackend> {
    backend: T,
}

impl<T: BookingBackend> BookingScheduler<T> {
    pub fn new(backend: T) -> Self {
        Self { backend }
    }

    /// Free slots for the given day, in the fixed slot order. Days outside
    /// the working week have no bookable slots and resolve to an empty list.
    pub fn availability(&self, day: &str) -> Result<Vec<&'static str>, BookingError> {
        let date = calendar::parse_day(day).map_err(|_| BookingError::InvalidDate)?;
        if !calendar::is_working_day(date) {
            return Ok(vec![]);
        }

        let booked: HashSet<String> = self
            .backend
            .bookings_on(day)?
            .into_iter()
            .map(|record| record.booking.time)
            .collect();

        Ok(TIME_SLOTS
            .iter()
            .copied()
            .filter(|slot| !booked.contains(*slot))
            .collect())
    }

    /// Validates and persists a booking, returning its generated identifier.
    pub fn book(&self, booking: Booking) -> Result<Uuid, BookingError> {
        let date = calendar::parse_day(&booking.date).map_err(|_| BookingError::InvalidDate)?;
        if !calendar::is_working_day(date) {
            return Err(BookingError::NotWorkingDay);
        }
        if !calendar::is_listed_slot(&booking.time) {
            return Err(BookingError::UnknownSlot(booking.time));
        }
        // Fast path for a friendly conflict response. The insert below
        // re-checks the unique (date, time) key and is authoritative.
        if self.backend.slot_taken(&booking.date, &booking.time)? {
            return Err(BookingError::SlotTaken);
        }

        match self.backend.insert_booking(booking) {
            Ok(id) => {
                info!(%id, "booking confirmed");
                Ok(id)
            }
            Err(StoreError::SlotTaken) => Err(BookingError::SlotTaken),
            Err(err) => {
                error!(?err, "failed to persist booking");
                Err(err.into())
            }
        }
    }
}
