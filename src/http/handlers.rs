//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the store's
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    Booking, BookingRequest, CreateRoomRequest, CustomerBookingReport, CustomerRecord,
    HealthResponse, Room, RoomStatusEntry,
};
use super::error::AppError;
use super::state::AppState;
use crate::store::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match services::health_check(state.store.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Writes
// =============================================================================

/// POST /rooms
///
/// Create a room. Returns 201 with the stored room, or 400 on validation
/// failure.
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let room = services::create_room(state.store.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// POST /bookings
///
/// Admit a booking. Returns 201 with the admitted booking, 400 on validation
/// failure or an unknown room, or 409 when the slot is already taken.
pub async fn admit_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = services::admit_booking(state.store.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

// =============================================================================
// Query Views
// =============================================================================

/// GET /rooms/bookings
///
/// List every room with its occupancy status and bookings.
pub async fn rooms_with_status(
    State(state): State<AppState>,
) -> HandlerResult<Vec<RoomStatusEntry>> {
    let entries = services::rooms_with_status(state.store.as_ref()).await?;
    Ok(Json(entries))
}

/// GET /customers/bookings
///
/// List the customer index in first-seen order.
pub async fn customers_with_bookings(
    State(state): State<AppState>,
) -> HandlerResult<Vec<CustomerRecord>> {
    let customers = services::customers_with_bookings(state.store.as_ref()).await?;
    Ok(Json(customers))
}

/// GET /customers/{customer_name}/bookings/count
///
/// Booking count and detail for one customer. Returns 404 when the customer
/// has no bookings.
pub async fn customer_booking_report(
    State(state): State<AppState>,
    Path(customer_name): Path<String>,
) -> HandlerResult<CustomerBookingReport> {
    let report = services::customer_booking_report(state.store.as_ref(), &customer_name).await?;
    Ok(Json(report))
}
