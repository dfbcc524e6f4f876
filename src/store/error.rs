//! Error types for store operations.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
///
/// Every variant is a local, synchronous failure; none are fatal to the
/// process and the store remains usable after any of them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// A required field was missing or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced room identifier does not exist.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The requested slot overlaps an existing booking for that room/date.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A query found no matching records.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Whether a caller could succeed by retrying with different input.
    ///
    /// Conflicts are retryable with another slot; validation and reference
    /// errors need corrected input; not-found is terminal for the query.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}
