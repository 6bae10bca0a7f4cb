//! Repository seam between the engine and persistence.

use crate::errors::StorageError;
use crate::types::AnalyteRecord;

/// Keyed access to per-analyte records with read-modify-write semantics.
///
/// The engine reads a whole [`AnalyteRecord`], mutates it, and writes it
/// back; implementations must make `store` atomic per analyte. No
/// cross-analyte coordination is required — analytes are independent.
pub trait QcRepository: Send + Sync {
    /// Load one analyte's record, or `None` if it was never stored.
    fn load(&self, analyte_id: &str) -> Result<Option<AnalyteRecord>, StorageError>;

    /// Store one analyte's record, replacing any previous state atomically.
    fn store(&self, analyte_id: &str, record: &AnalyteRecord) -> Result<(), StorageError>;

    /// All analyte ids with a stored record.
    fn list_analytes(&self) -> Result<Vec<String>, StorageError>;
}
