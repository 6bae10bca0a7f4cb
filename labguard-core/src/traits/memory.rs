//! In-memory repository for tests and embedded use.

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::errors::StorageError;
use crate::types::AnalyteRecord;

use super::QcRepository;

/// Map-backed [`QcRepository`]. Whole-record clones keep reads and writes
/// trivially atomic per analyte.
#[derive(Default)]
pub struct MemoryRepository {
    inner: Mutex<FxHashMap<String, AnalyteRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QcRepository for MemoryRepository {
    fn load(&self, analyte_id: &str) -> Result<Option<AnalyteRecord>, StorageError> {
        let guard = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(analyte_id).cloned())
    }

    fn store(&self, analyte_id: &str, record: &AnalyteRecord) -> Result<(), StorageError> {
        let mut guard = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(analyte_id.to_string(), record.clone());
        Ok(())
    }

    fn list_analytes(&self) -> Result<Vec<String>, StorageError> {
        let guard = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut ids: Vec<String> = guard.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
