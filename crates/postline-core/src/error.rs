//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unparseable schedule date: {raw:?}")]
    MalformedScheduleDate { raw: String },
}

/// Store-level errors.
///
/// The in-memory store never fails, but the port keeps the `Result` shape
/// so a durable backend can slot in behind the same trait.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend failed: {0}")]
    Backend(String),
}
