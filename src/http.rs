use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::scheduler::BookingScheduler;
use crate::types::Booking;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{
    routing::{get, post},
    Json, Router,
};
use axum_valid::Valid;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState<T: BookingBackend> {
    scheduler: BookingScheduler<T>,
    backend: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusResponse {
    backend: String,
    database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityResponse {
    date: String,
    available: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingResponse {
    id: Uuid,
    message: String,
}

pub fn create_app<T: BookingBackend>(backend: T) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        scheduler: BookingScheduler::new(backend.clone()),
        backend,
    };

    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
        .route("/api/availability/{day}", get(get_availability))
        .route("/api/book", post(create_booking))
        .with_state(state)
        .layer(cors)
}

async fn read_root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Autocare booking API running".into(),
    })
}

async fn test_database<T: BookingBackend>(
    State(state): State<AppState<T>>,
) -> impl IntoResponse {
    let database = match state.backend.ping() {
        Ok(()) => "connected".into(),
        Err(err) => {
            error!(?err, "database status probe failed");
            format!("unavailable: {err}")
        }
    };
    Json(StatusResponse {
        backend: "running".into(),
        database,
    })
}

async fn get_availability<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Path(day): Path<String>,
) -> Result<Json<AvailabilityResponse>, BookingError> {
    let available = state.scheduler.availability(&day)?;
    Ok(Json(AvailabilityResponse {
        date: day,
        available: available.into_iter().map(String::from).collect(),
    }))
}

async fn create_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Valid(Json(booking)): Valid<Json<Booking>>,
) -> Result<Json<BookingResponse>, BookingError> {
    let id = state.scheduler.book(booking)?;
    Ok(Json(BookingResponse {
        id,
        message: "Booking confirmed".into(),
    }))
}
