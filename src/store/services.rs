//! High-level service layer for the booking store.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`BookingRepository`]. Request validation and logging
//! live here so they are consistent regardless of the storage backend; the
//! atomic check-then-act part of admission stays inside the repository, under
//! its lock.
//!
//! # Usage
//!
//! ```no_run
//! use roombook::api::CreateRoomRequest;
//! use roombook::store::{services, LocalStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = LocalStore::new();
//!
//!     let room = services::create_room(
//!         &store,
//!         &CreateRoomRequest {
//!             name: "Alpha".to_string(),
//!             seats: 10,
//!             amenities: vec!["TV".to_string()],
//!             price: 50.0,
//!         },
//!     )
//!     .await?;
//!     println!("Created room {}", room.id);
//!
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::BookingRepository;
use super::StoreResult;
use crate::api::{
    Booking, BookingRequest, CreateRoomRequest, CustomerBookingReport, CustomerRecord, Room,
    RoomStatusEntry,
};

/// Check that the store is reachable.
pub async fn health_check<R: BookingRepository + ?Sized>(repo: &R) -> StoreResult<bool> {
    repo.health_check().await
}

/// Validate and create a room.
pub async fn create_room<R: BookingRepository + ?Sized>(
    repo: &R,
    request: &CreateRoomRequest,
) -> StoreResult<Room> {
    request.validate()?;

    let room = repo.create_room(request).await?;
    info!("Created room {} ({})", room.id, room.name);
    Ok(room)
}

/// Validate and admit a booking.
///
/// Validation checks field presence only; room resolution and the conflict
/// scan happen atomically inside the repository.
pub async fn admit_booking<R: BookingRepository + ?Sized>(
    repo: &R,
    request: &BookingRequest,
) -> StoreResult<Booking> {
    request.validate()?;

    match repo.admit_booking(request).await {
        Ok(booking) => {
            info!(
                "Admitted booking {} for {} in room {} on {} [{}, {})",
                booking.id,
                booking.customer_name,
                booking.room_id,
                booking.date,
                booking.start_time,
                booking.end_time
            );
            Ok(booking)
        }
        Err(e) => {
            if e.is_conflict() {
                warn!(
                    "Rejected booking for room {} on {} [{}, {}): slot taken",
                    request.room_id, request.date, request.start_time, request.end_time
                );
            }
            Err(e)
        }
    }
}

/// Every room with its occupancy status and bookings.
pub async fn rooms_with_status<R: BookingRepository + ?Sized>(
    repo: &R,
) -> StoreResult<Vec<RoomStatusEntry>> {
    repo.rooms_with_status().await
}

/// The customer index in first-seen order.
pub async fn customers_with_bookings<R: BookingRepository + ?Sized>(
    repo: &R,
) -> StoreResult<Vec<CustomerRecord>> {
    repo.customers_with_bookings().await
}

/// Booking count and detail for one customer.
pub async fn customer_booking_report<R: BookingRepository + ?Sized>(
    repo: &R,
    customer_name: &str,
) -> StoreResult<CustomerBookingReport> {
    repo.customer_booking_report(customer_name).await
}
