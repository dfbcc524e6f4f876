//! Public API surface for the booking service.
//!
//! This file consolidates the domain types and DTOs exchanged between the
//! store, the service layer, and the HTTP transport. All types derive
//! Serialize/Deserialize; wire field names follow the camelCase JSON contract
//! of the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{StoreError, StoreResult};

/// Room identifier (assigned by the store on creation).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub i64);

/// Booking identifier (assigned by the store on admission).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(pub i64);

impl RoomId {
    pub fn new(value: i64) -> Self {
        RoomId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl BookingId {
    pub fn new(value: i64) -> Self {
        BookingId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable room. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub seats: u32,
    pub amenities: Vec<String>,
    pub price: f64,
}

/// Booking lifecycle status.
///
/// Only one state exists: bookings are append-only and there are no
/// cancellation or modification operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Booked => write!(f, "Booked"),
        }
    }
}

/// A reservation of a room for a half-open time slot `[start, end)` on a
/// single date.
///
/// Dates (`YYYY-MM-DD`) and times (`HH:MM`) are kept as strings and compared
/// lexicographically, consistent with the input format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: RoomId,
    pub status: BookingStatus,
    /// Admission instant, serialized as `bookingDate` (RFC 3339).
    #[serde(rename = "bookingDate")]
    pub created_at: DateTime<Utc>,
}

/// Denormalized booking summary stored in the customer index.
///
/// The room name is a copy captured at admission time, not a live reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Customer index entry: a name and their booking history in admission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub bookings: Vec<BookingSummary>,
}

// =============================================================================
// Request structs
// =============================================================================

/// Request to create a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub seats: u32,
    pub amenities: Vec<String>,
    pub price: f64,
}

impl CreateRoomRequest {
    /// Check that every required field is present and non-empty.
    ///
    /// Zero seats or a zero price are rejected; an empty amenities list is
    /// accepted.
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() || self.seats == 0 || self.price <= 0.0 {
            return Err(StoreError::Validation("All fields are required".to_string()));
        }
        Ok(())
    }
}

/// Request to admit a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: RoomId,
}

impl BookingRequest {
    /// Check that every required field is present and non-empty.
    pub fn validate(&self) -> StoreResult<()> {
        if self.customer_name.trim().is_empty()
            || self.date.trim().is_empty()
            || self.start_time.trim().is_empty()
            || self.end_time.trim().is_empty()
            || self.room_id.value() < 1
        {
            return Err(StoreError::Validation("All fields are required".to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// Query-view DTOs
// =============================================================================

/// Room occupancy status reported by the rooms-with-bookings view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomAvailability {
    Booked,
    Available,
}

/// One row of the rooms-with-bookings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusEntry {
    pub name: String,
    pub booked_status: RoomAvailability,
    pub bookings: Vec<Booking>,
}

/// Fully joined detail row for the per-customer booking report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_id: BookingId,
    pub booking_date: DateTime<Utc>,
    pub booking_status: BookingStatus,
}

/// Per-customer booking count and detail, in admission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingReport {
    pub customer_name: String,
    pub booking_count: usize,
    pub bookings: Vec<BookingDetail>,
}
