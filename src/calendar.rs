use chrono::{Datelike, NaiveDate, Weekday};

/// The fixed daily appointment slots, in the order they are offered.
pub const TIME_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

pub fn parse_day(day: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
}

/// Appointments are only offered Monday to Friday.
pub fn is_working_day(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_listed_slot(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}
