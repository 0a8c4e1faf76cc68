use crate::backend::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Rejection reasons for the booking endpoints. Each maps to a status code
/// and is surfaced to the caller as `{"detail": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,
    #[error("Selected date is not a working day (Mon-Fri)")]
    NotWorkingDay,
    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),
    #[error("This time slot is already booked")]
    SlotTaken,
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

impl BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDate | Self::NotWorkingDay | Self::UnknownSlot(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::SlotTaken => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
