//! Conflict detection for booking admission.
//!
//! A candidate slot conflicts with an existing booking when both target the
//! same room on the same date and their half-open time intervals
//! `[start, end)` intersect. Boundary equality is not an overlap, so
//! back-to-back slots (one ending exactly when the next starts) are both
//! admissible.
//!
//! Times are compared lexicographically as `HH:MM` strings; no duration or
//! timezone arithmetic is performed.

use crate::api::{Booking, BookingRequest};

/// Pure predicate: does `candidate` overlap `existing`?
///
/// Covers all three intersection shapes: candidate start inside the existing
/// interval, candidate end inside it, and candidate fully containing it. The
/// single comparison below is equivalent to the union of those cases for
/// half-open intervals.
pub fn overlaps(candidate: &BookingRequest, existing: &Booking) -> bool {
    existing.room_id == candidate.room_id
        && existing.date == candidate.date
        && candidate.start_time < existing.end_time
        && existing.start_time < candidate.end_time
}
