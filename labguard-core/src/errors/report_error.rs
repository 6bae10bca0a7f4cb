//! Report generation errors.

/// Errors from report building and serialization.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
