//! Persistence errors.

/// Errors from repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("Stored data is corrupted: {message}")]
    Corrupted { message: String },

    #[error("Repository lock poisoned")]
    LockPoisoned,
}
