//! Entity store for rooms, bookings, and the customer index.
//!
//! This module follows the repository pattern: the [`BookingRepository`]
//! trait is the abstract seam, and [`LocalStore`] is the in-memory
//! implementation backing it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Request validation                                   │
//! │  - Logging                                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  BookingRepository trait (repository.rs)                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             LocalStore                        │
//!     │   (in-memory, single RwLock, monotonic ids)   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The conflict predicate in [`conflict`] is pure and lock-free; the store
//! calls it while holding the write lock so the check-then-act sequence of
//! booking admission is atomic with respect to concurrent requests.

pub mod conflict;
pub mod error;
pub mod memory;
pub mod repository;
pub mod services;

pub use error::{StoreError, StoreResult};
pub use memory::LocalStore;
pub use repository::BookingRepository;
