//! In-memory store implementation.
//!
//! All data lives in plain `Vec`s behind a single `RwLock`, which is
//! sufficient for the expected volumes: lookups are linear scans and
//! admission is not a hot path that would justify per-room sharding. The
//! customer index is a `Vec` rather than a map so it preserves first-seen
//! order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use super::conflict;
use super::error::{StoreError, StoreResult};
use super::repository::BookingRepository;
use crate::api::{
    Booking, BookingDetail, BookingId, BookingRequest, BookingStatus, BookingSummary,
    CreateRoomRequest, CustomerBookingReport, CustomerRecord, Room, RoomAvailability, RoomId,
    RoomStatusEntry,
};

/// In-memory booking store.
///
/// Cloning is cheap and shares the underlying state, so the HTTP layer can
/// hold one instance per handler invocation.
#[derive(Clone)]
pub struct LocalStore {
    data: Arc<RwLock<StoreData>>,
}

struct StoreData {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    // Insertion-ordered customer index, kept consistent with `bookings`
    // by updating both under the same write-lock acquisition.
    customers: Vec<CustomerRecord>,

    // Monotonic counters; never derived from collection length.
    next_room_id: i64,
    next_booking_id: i64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            bookings: Vec::new(),
            customers: Vec::new(),
            next_room_id: 1,
            next_booking_id: 1,
        }
    }
}

impl LocalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData::default())),
        }
    }

    /// Number of rooms currently stored.
    pub fn room_count(&self) -> usize {
        self.data.read().rooms.len()
    }

    /// Number of bookings currently stored.
    pub fn booking_count(&self) -> usize {
        self.data.read().bookings.len()
    }

    /// Number of distinct customers in the index.
    pub fn customer_count(&self) -> usize {
        self.data.read().customers.len()
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for LocalStore {
    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }

    async fn create_room(&self, request: &CreateRoomRequest) -> StoreResult<Room> {
        let mut data = self.data.write();

        let id = RoomId::new(data.next_room_id);
        data.next_room_id += 1;

        let room = Room {
            id,
            name: request.name.clone(),
            seats: request.seats,
            amenities: request.amenities.clone(),
            price: request.price,
        };
        data.rooms.push(room.clone());

        Ok(room)
    }

    async fn get_room(&self, room_id: RoomId) -> StoreResult<Room> {
        let data = self.data.read();
        data.rooms
            .iter()
            .find(|r| r.id == room_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Room {} not found", room_id)))
    }

    async fn admit_booking(&self, request: &BookingRequest) -> StoreResult<Booking> {
        // The whole check-then-act sequence runs under one write-lock
        // acquisition: room resolution, conflict scan, booking append, and
        // customer-index update. Readers see either none or all of it.
        let mut data = self.data.write();

        let room_name = data
            .rooms
            .iter()
            .find(|r| r.id == request.room_id)
            .map(|r| r.name.clone())
            .ok_or_else(|| StoreError::InvalidReference("Invalid roomId".to_string()))?;

        if data.bookings.iter().any(|b| conflict::overlaps(request, b)) {
            return Err(StoreError::Conflict(
                "Room already booked for this time slot".to_string(),
            ));
        }

        let id = BookingId::new(data.next_booking_id);
        data.next_booking_id += 1;

        let booking = Booking {
            id,
            customer_name: request.customer_name.clone(),
            date: request.date.clone(),
            start_time: request.start_time.clone(),
            end_time: request.end_time.clone(),
            room_id: request.room_id,
            status: BookingStatus::Booked,
            created_at: Utc::now(),
        };
        data.bookings.push(booking.clone());

        let summary = BookingSummary {
            room_name,
            date: request.date.clone(),
            start_time: request.start_time.clone(),
            end_time: request.end_time.clone(),
        };
        match data
            .customers
            .iter_mut()
            .find(|c| c.name == request.customer_name)
        {
            Some(record) => record.bookings.push(summary),
            None => data.customers.push(CustomerRecord {
                name: request.customer_name.clone(),
                bookings: vec![summary],
            }),
        }

        Ok(booking)
    }

    async fn rooms_with_status(&self) -> StoreResult<Vec<RoomStatusEntry>> {
        let data = self.data.read();

        let entries = data
            .rooms
            .iter()
            .map(|room| {
                let bookings: Vec<Booking> = data
                    .bookings
                    .iter()
                    .filter(|b| b.room_id == room.id)
                    .cloned()
                    .collect();
                let booked_status = if bookings.is_empty() {
                    RoomAvailability::Available
                } else {
                    RoomAvailability::Booked
                };
                RoomStatusEntry {
                    name: room.name.clone(),
                    booked_status,
                    bookings,
                }
            })
            .collect();

        Ok(entries)
    }

    async fn customers_with_bookings(&self) -> StoreResult<Vec<CustomerRecord>> {
        let data = self.data.read();
        Ok(data.customers.clone())
    }

    async fn customer_booking_report(
        &self,
        customer_name: &str,
    ) -> StoreResult<CustomerBookingReport> {
        let data = self.data.read();

        let details: Vec<BookingDetail> = data
            .bookings
            .iter()
            .filter(|b| b.customer_name == customer_name)
            .map(|b| {
                let room_name = data
                    .rooms
                    .iter()
                    .find(|r| r.id == b.room_id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                BookingDetail {
                    customer_name: b.customer_name.clone(),
                    room_name,
                    date: b.date.clone(),
                    start_time: b.start_time.clone(),
                    end_time: b.end_time.clone(),
                    booking_id: b.id,
                    booking_date: b.created_at,
                    booking_status: b.status,
                }
            })
            .collect();

        if details.is_empty() {
            return Err(StoreError::NotFound(
                "No bookings found for this customer".to_string(),
            ));
        }

        Ok(CustomerBookingReport {
            customer_name: customer_name.to_string(),
            booking_count: details.len(),
            bookings: details,
        })
    }
}
