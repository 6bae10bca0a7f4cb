//! Session and engine errors.

use super::StorageError;

/// Errors from measurement/configuration mutations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Non-finite numbers are rejected before they reach the evaluator,
    /// whose comparisons are only meaningful over finite input.
    #[error("Non-finite {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("Unknown analyte: {0}")]
    UnknownAnalyte(String),

    #[error("Unknown measurement: {0}")]
    UnknownMeasurement(String),

    #[error("Duplicate measurement id: {0}")]
    DuplicateMeasurement(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
