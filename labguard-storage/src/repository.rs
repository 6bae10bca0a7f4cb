//! SQLite-backed [`QcRepository`].

use std::path::Path;

use labguard_core::{AnalyteRecord, QcRepository, StorageError};
use tracing::debug;

use crate::connection::DatabaseManager;
use crate::queries::{controls, measurements};

/// Repository over a [`DatabaseManager`].
///
/// `store` replaces an analyte's whole record in one transaction, so readers
/// never observe a control without its re-evaluated measurements.
pub struct SqliteRepository {
    db: DatabaseManager,
}

impl SqliteRepository {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path)?,
        })
    }

    /// In-memory repository for tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }
}

impl QcRepository for SqliteRepository {
    fn load(&self, analyte_id: &str) -> Result<Option<AnalyteRecord>, StorageError> {
        self.db.with_conn(|conn| {
            let Some(control) = controls::get(conn, analyte_id)? else {
                return Ok(None);
            };
            let measurements = measurements::list_for_analyte(conn, analyte_id)?;
            Ok(Some(AnalyteRecord {
                control,
                measurements,
            }))
        })
    }

    fn store(&self, analyte_id: &str, record: &AnalyteRecord) -> Result<(), StorageError> {
        self.db.with_conn(|conn| {
            let tx = conn.transaction().map_err(|e| StorageError::Sqlite {
                message: e.to_string(),
            })?;
            controls::upsert(&tx, &record.control)?;
            measurements::delete_for_analyte(&tx, analyte_id)?;
            for measurement in &record.measurements {
                measurements::insert(&tx, analyte_id, measurement)?;
            }
            tx.commit().map_err(|e| StorageError::Sqlite {
                message: e.to_string(),
            })?;
            debug!(
                analyte_id,
                points = record.measurements.len(),
                "stored analyte record"
            );
            Ok(())
        })
    }

    fn list_analytes(&self) -> Result<Vec<String>, StorageError> {
        self.db.with_conn(|conn| controls::list_ids(conn))
    }
}
