//! Queries for the controls table.

use labguard_core::{ControlConfig, StorageError};
use rusqlite::{params, Connection, OptionalExtension};

/// Insert or replace one analyte's control configuration.
pub fn upsert(conn: &Connection, control: &ControlConfig) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO controls (analyte_id, display_name, mean, sd, unit)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(analyte_id) DO UPDATE SET
            display_name = excluded.display_name,
            mean = excluded.mean,
            sd = excluded.sd,
            unit = excluded.unit",
        params![
            control.analyte_id,
            control.display_name,
            control.mean,
            control.sd,
            control.unit
        ],
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Fetch one analyte's control configuration.
pub fn get(conn: &Connection, analyte_id: &str) -> Result<Option<ControlConfig>, StorageError> {
    conn.prepare_cached(
        "SELECT analyte_id, display_name, mean, sd, unit FROM controls WHERE analyte_id = ?1",
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })?
    .query_row(params![analyte_id], |row| {
        Ok(ControlConfig {
            analyte_id: row.get(0)?,
            display_name: row.get(1)?,
            mean: row.get(2)?,
            sd: row.get(3)?,
            unit: row.get(4)?,
        })
    })
    .optional()
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })
}

/// All stored analyte ids, sorted.
pub fn list_ids(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT analyte_id FROM controls ORDER BY analyte_id")
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })
}
