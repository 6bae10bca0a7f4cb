//! Queries for the measurements table.
//!
//! Dates are ISO-8601 day strings, so lexicographic order is chronological
//! and the (analyte_id, date, id) index yields evaluation order directly.
//! Rule lists are stored as JSON arrays of rule codes.

use chrono::NaiveDate;
use labguard_core::{Measurement, QcStatus, RuleSet, StorageError};
use rusqlite::{params, Connection};

/// Delete every measurement for one analyte.
pub fn delete_for_analyte(conn: &Connection, analyte_id: &str) -> Result<(), StorageError> {
    conn.execute(
        "DELETE FROM measurements WHERE analyte_id = ?1",
        params![analyte_id],
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Insert one measurement row.
pub fn insert(
    conn: &Connection,
    analyte_id: &str,
    measurement: &Measurement,
) -> Result<(), StorageError> {
    let rules_json =
        serde_json::to_string(&measurement.rules).map_err(|e| StorageError::Corrupted {
            message: e.to_string(),
        })?;
    conn.prepare_cached(
        "INSERT INTO measurements (id, analyte_id, date, value, z_score, status, rules, comment)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })?
    .execute(params![
        measurement.id,
        analyte_id,
        measurement.date.to_string(),
        measurement.value,
        measurement.z_score,
        measurement.status.map(|s| s.as_str()),
        rules_json,
        measurement.comment,
    ])
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })?;
    Ok(())
}

/// All measurements for one analyte in evaluation order (date, id).
pub fn list_for_analyte(
    conn: &Connection,
    analyte_id: &str,
) -> Result<Vec<Measurement>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, date, value, z_score, status, rules, comment
             FROM measurements WHERE analyte_id = ?1 ORDER BY date, id",
        )
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map(params![analyte_id], |row| {
            Ok(RawRow {
                id: row.get(0)?,
                date: row.get(1)?,
                value: row.get(2)?,
                z_score: row.get(3)?,
                status: row.get(4)?,
                rules: row.get(5)?,
                comment: row.get(6)?,
            })
        })
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })?;

    let raw = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })?;
    raw.into_iter().map(RawRow::into_measurement).collect()
}

struct RawRow {
    id: String,
    date: String,
    value: f64,
    z_score: Option<f64>,
    status: Option<String>,
    rules: String,
    comment: Option<String>,
}

impl RawRow {
    fn into_measurement(self) -> Result<Measurement, StorageError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            StorageError::Corrupted {
                message: format!("invalid date for measurement {}: {}", self.id, self.date),
            }
        })?;
        let status = match self.status {
            None => None,
            Some(text) => Some(QcStatus::parse(&text).ok_or_else(|| StorageError::Corrupted {
                message: format!("invalid status for measurement {}: {}", self.id, text),
            })?),
        };
        let rules: RuleSet =
            serde_json::from_str(&self.rules).map_err(|e| StorageError::Corrupted {
                message: format!("invalid rules for measurement {}: {}", self.id, e),
            })?;
        Ok(Measurement {
            id: self.id,
            date,
            value: self.value,
            comment: self.comment,
            z_score: self.z_score,
            status,
            rules,
        })
    }
}
