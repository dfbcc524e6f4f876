//! Store-level behavior tests: admission, conflict detection, and the query
//! views, driven directly against `LocalStore` through the repository trait.

use roombook::api::{BookingRequest, CreateRoomRequest, RoomAvailability, RoomId};
use roombook::store::{BookingRepository, LocalStore, StoreError};

fn room(name: &str) -> CreateRoomRequest {
    CreateRoomRequest {
        name: name.to_string(),
        seats: 10,
        amenities: vec!["TV".to_string()],
        price: 50.0,
    }
}

fn slot(customer: &str, date: &str, start: &str, end: &str, room: i64) -> BookingRequest {
    BookingRequest {
        customer_name: customer.to_string(),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        room_id: RoomId::new(room),
    }
}

#[tokio::test]
async fn admission_scenario_conflict_then_adjacent() {
    let store = LocalStore::new();

    let alpha = store.create_room(&room("Alpha")).await.unwrap();
    assert_eq!(alpha.id.value(), 1);
    assert_eq!(alpha.name, "Alpha");

    let first = store
        .admit_booking(&slot("Ann", "2024-01-01", "09:00", "10:00", 1))
        .await
        .unwrap();
    assert_eq!(first.id.value(), 1);

    // Overlapping request is rejected
    let overlapping = store
        .admit_booking(&slot("Bo", "2024-01-01", "09:30", "10:30", 1))
        .await;
    assert!(matches!(overlapping, Err(StoreError::Conflict(_))));

    // Adjacent request (starts exactly when the first ends) is admitted
    let adjacent = store
        .admit_booking(&slot("Bo", "2024-01-01", "10:00", "11:00", 1))
        .await
        .unwrap();
    assert_eq!(adjacent.id.value(), 2);
}

#[tokio::test]
async fn admitted_bookings_never_overlap_per_room_and_date() {
    let store = LocalStore::new();
    store.create_room(&room("Alpha")).await.unwrap();
    store.create_room(&room("Beta")).await.unwrap();

    let requests = vec![
        slot("Ann", "2024-01-01", "09:00", "10:00", 1),
        slot("Bo", "2024-01-01", "09:30", "10:30", 1), // conflicts
        slot("Bo", "2024-01-01", "10:00", "11:00", 1),
        slot("Cy", "2024-01-01", "09:30", "10:30", 2), // other room, fine
        slot("Cy", "2024-01-02", "09:30", "10:30", 1), // other date, fine
        slot("Dee", "2024-01-01", "08:00", "12:00", 1), // envelops, conflicts
    ];

    for req in &requests {
        let _ = store.admit_booking(req).await;
    }

    let entries = store.rooms_with_status().await.unwrap();
    for entry in &entries {
        for a in &entry.bookings {
            for b in &entry.bookings {
                if a.id == b.id || a.date != b.date {
                    continue;
                }
                let disjoint = a.end_time <= b.start_time || b.end_time <= a.start_time;
                assert!(
                    disjoint,
                    "bookings {} and {} overlap in room {:?}",
                    a.id, b.id, entry.name
                );
            }
        }
    }
}

#[tokio::test]
async fn rooms_view_reports_availability() {
    let store = LocalStore::new();
    store.create_room(&room("Alpha")).await.unwrap();
    store.create_room(&room("Beta")).await.unwrap();

    store
        .admit_booking(&slot("Ann", "2024-01-01", "09:00", "10:00", 1))
        .await
        .unwrap();

    let entries = store.rooms_with_status().await.unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "Alpha");
    assert_eq!(entries[0].booked_status, RoomAvailability::Booked);
    assert_eq!(entries[0].bookings.len(), 1);

    assert_eq!(entries[1].name, "Beta");
    assert_eq!(entries[1].booked_status, RoomAvailability::Available);
    assert!(entries[1].bookings.is_empty());
}

#[tokio::test]
async fn customer_report_counts_in_admission_order() {
    let store = LocalStore::new();
    store.create_room(&room("Alpha")).await.unwrap();
    store.create_room(&room("Beta")).await.unwrap();

    store
        .admit_booking(&slot("Ann", "2024-01-01", "09:00", "10:00", 1))
        .await
        .unwrap();
    store
        .admit_booking(&slot("Ann", "2024-01-01", "09:00", "10:00", 2))
        .await
        .unwrap();
    store
        .admit_booking(&slot("Ann", "2024-01-02", "11:00", "12:00", 1))
        .await
        .unwrap();

    let report = store.customer_booking_report("Ann").await.unwrap();
    assert_eq!(report.customer_name, "Ann");
    assert_eq!(report.booking_count, 3);
    assert_eq!(report.bookings.len(), 3);

    // Admission order, with room names joined from the room collection
    assert_eq!(report.bookings[0].room_name, "Alpha");
    assert_eq!(report.bookings[1].room_name, "Beta");
    assert_eq!(report.bookings[2].room_name, "Alpha");
    assert_eq!(report.bookings[2].date, "2024-01-02");

    let ids: Vec<i64> = report.bookings.iter().map(|b| b.booking_id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn customer_report_unknown_name_is_not_found() {
    let store = LocalStore::new();
    let result = store.customer_booking_report("Nobody").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn customer_index_preserves_first_seen_order() {
    let store = LocalStore::new();
    store.create_room(&room("Alpha")).await.unwrap();

    store
        .admit_booking(&slot("Bo", "2024-01-01", "09:00", "10:00", 1))
        .await
        .unwrap();
    store
        .admit_booking(&slot("Ann", "2024-01-01", "10:00", "11:00", 1))
        .await
        .unwrap();
    store
        .admit_booking(&slot("Bo", "2024-01-01", "11:00", "12:00", 1))
        .await
        .unwrap();

    let customers = store.customers_with_bookings().await.unwrap();
    let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Ann"]);
    assert_eq!(customers[0].bookings.len(), 2);
    assert_eq!(customers[1].bookings.len(), 1);
}

#[tokio::test]
async fn failed_admission_consumes_no_booking_id() {
    let store = LocalStore::new();
    store.create_room(&room("Alpha")).await.unwrap();

    store
        .admit_booking(&slot("Ann", "2024-01-01", "09:00", "10:00", 1))
        .await
        .unwrap();

    // A conflicting and an invalid-room attempt, both rejected
    let _ = store
        .admit_booking(&slot("Bo", "2024-01-01", "09:00", "10:00", 1))
        .await;
    let _ = store
        .admit_booking(&slot("Bo", "2024-01-01", "12:00", "13:00", 99))
        .await;

    let next = store
        .admit_booking(&slot("Bo", "2024-01-01", "12:00", "13:00", 1))
        .await
        .unwrap();
    assert_eq!(next.id.value(), 2);
}
