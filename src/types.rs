use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref REGISTRATION_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]{1,11}$").unwrap();
}

/// A booking as submitted by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Booking {
    #[validate(length(min = 2, message = "Name must have at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, max = 20, message = "Invalid phone number"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Vehicle must not be empty"))]
    pub vehicle: String,
    #[validate(regex(path = *REGISTRATION_PATTERN, message = "Invalid registration plate"))]
    pub registration: String,
    /// Booking day, `YYYY-MM-DD`.
    pub date: String,
    /// One of the fixed slot labels, e.g. `09:00`.
    pub time: String,
    pub notes: Option<String>,
}

/// A stored booking together with its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub id: Uuid,
    pub booking: Booking,
}
