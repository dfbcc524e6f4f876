//! # Roombook
//!
//! In-memory room-booking coordination service.
//!
//! This crate tracks a catalog of bookable rooms, records time-slot
//! reservations against those rooms, and maintains a derived customer-booking
//! index. The service exposes a REST API via Axum; the booking logic itself is
//! transport-agnostic and lives behind a repository trait.
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`api`]: domain types, request structs, and query-view DTOs
//! - [`store`]: the entity store, conflict detection, and the admission engine
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Writes (room creation, booking admission) and reads (the query views) both
//! go through the [`store::BookingRepository`] trait. The in-memory
//! implementation, [`store::LocalStore`], runs the whole admission sequence —
//! room resolution, conflict scan, booking append, customer-index update —
//! under one write-lock acquisition, so concurrent callers never observe a
//! half-admitted booking.

pub mod api;

pub mod store;

pub mod http;
