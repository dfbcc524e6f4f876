//! Data Transfer Objects for the HTTP API.
//!
//! The domain types in [`crate::api`] already carry the wire-facing serde
//! attributes, so most DTOs are re-exports; only transport-specific response
//! envelopes are defined here.

use serde::{Deserialize, Serialize};

// Re-export request and response types that are already serializable
pub use crate::api::{
    Booking, BookingDetail, BookingRequest, BookingSummary, CreateRoomRequest,
    CustomerBookingReport, CustomerRecord, Room, RoomStatusEntry,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}
