//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::BookingRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store instance backing every read and write.
    pub store: Arc<dyn BookingRepository>,
}

impl AppState {
    /// Create a new application state with the given store.
    pub fn new(store: Arc<dyn BookingRepository>) -> Self {
        Self { store }
    }
}
