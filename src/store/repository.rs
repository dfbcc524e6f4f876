//! Repository trait for the booking store.
//!
//! This trait is the seam between the transport/service layers and the
//! storage backend. The only implementation in this crate is the in-memory
//! [`crate::store::LocalStore`], but all callers go through the trait so a
//! persistent backend could be swapped in without touching them.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::api::{
    Booking, BookingRequest, CreateRoomRequest, CustomerBookingReport, CustomerRecord, Room,
    RoomId, RoomStatusEntry,
};

/// Repository trait for room and booking operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`. Admission (`admit_booking`) must be
/// atomic with respect to concurrent calls: no two overlapping requests for
/// the same room and date may both succeed, and readers must never observe a
/// booking without its customer-index update (or vice versa).
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Liveness probe for the transport layer.
    async fn health_check(&self) -> StoreResult<bool>;

    // ==================== Rooms ====================

    /// Create a room and assign it the next identifier.
    ///
    /// Field validation is the caller's responsibility (see the service
    /// layer); the store itself performs no conflict checking for rooms.
    async fn create_room(&self, request: &CreateRoomRequest) -> StoreResult<Room>;

    /// Fetch a room by id.
    ///
    /// # Returns
    /// * `Ok(Room)` - The room
    /// * `Err(StoreError::NotFound)` - If no room has that id
    async fn get_room(&self, room_id: RoomId) -> StoreResult<Room>;

    // ==================== Admission ====================

    /// Admit a booking: resolve the room, scan for conflicts, and on success
    /// append the booking and update the customer index in one atomic step.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The admitted booking with its assigned id
    /// * `Err(StoreError::InvalidReference)` - If the room does not exist
    /// * `Err(StoreError::Conflict)` - If the slot overlaps an existing
    ///   booking for that room and date; no state is changed
    async fn admit_booking(&self, request: &BookingRequest) -> StoreResult<Booking>;

    // ==================== Query views ====================

    /// Every room with its occupancy status and bookings, in creation order.
    async fn rooms_with_status(&self) -> StoreResult<Vec<RoomStatusEntry>>;

    /// The customer index, in the order customers were first seen.
    async fn customers_with_bookings(&self) -> StoreResult<Vec<CustomerRecord>>;

    /// Booking count and joined detail for one customer, in admission order.
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - If the customer has zero bookings
    ///   (unknown names map to the same outcome)
    async fn customer_booking_report(&self, customer_name: &str)
        -> StoreResult<CustomerBookingReport>;
}
