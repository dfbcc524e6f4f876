//! HTTP server module for the booking service.
//!
//! This module provides an axum-based HTTP server that exposes the booking
//! core as a REST API. It is deliberately thin: handlers parse requests,
//! delegate to the store's service layer, and serialize the results. All
//! business logic stays below the [`crate::store::BookingRepository`] seam.

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
