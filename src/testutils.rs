use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use uuid::Uuid;

use crate::backend::{BookingBackend, StoreError};
use crate::types::{Booking, BookingRecord};

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_bookings_on: AtomicU64,
    pub calls_to_slot_taken: AtomicU64,
    pub calls_to_insert_booking: AtomicU64,
    pub calls_to_ping: AtomicU64,
    pub bookings: Mutex<Vec<BookingRecord>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_bookings_on: AtomicU64::default(),
            calls_to_slot_taken: AtomicU64::default(),
            calls_to_insert_booking: AtomicU64::default(),
            calls_to_ping: AtomicU64::default(),
            bookings: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    /// Seeds a stored booking without going through the validator.
    pub fn seed_booking(&self, booking: Booking) -> Uuid {
        let id = Uuid::new_v4();
        self.0
            .bookings
            .lock()
            .unwrap()
            .push(BookingRecord { id, booking });
        id
    }

    fn check_success(&self) -> Result<(), StoreError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(StoreError::Database("Supposed to fail".into())),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings_on(&self, day: &str) -> Result<Vec<BookingRecord>, StoreError> {
        self.0.calls_to_bookings_on.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.booking.date == day)
            .cloned()
            .collect())
    }

    fn slot_taken(&self, day: &str, slot: &str) -> Result<bool, StoreError> {
        self.0.calls_to_slot_taken.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .any(|record| record.booking.date == day && record.booking.time == slot))
    }

    fn insert_booking(&self, booking: Booking) -> Result<Uuid, StoreError> {
        self.0.calls_to_insert_booking.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        let mut bookings = self.0.bookings.lock().unwrap();
        if bookings
            .iter()
            .any(|record| record.booking.date == booking.date && record.booking.time == booking.time)
        {
            return Err(StoreError::SlotTaken);
        }
        let id = Uuid::new_v4();
        bookings.push(BookingRecord { id, booking });
        Ok(id)
    }

    fn ping(&self) -> Result<(), StoreError> {
        self.0.calls_to_ping.fetch_add(1, Ordering::SeqCst);
        self.check_success()
    }
}

pub fn example_booking(date: &str, time: &str) -> Booking {
    Booking {
        name: "Alex Carter".into(),
        email: "alex.carter@example.com".into(),
        phone: "0123456789".into(),
        vehicle: "VW Golf GTI".into(),
        registration: "AB12 CDE".into(),
        date: date.into(),
        time: time.into(),
        notes: None,
    }
}
