//! Schema migrations gated on SQLite's `user_version`.

mod v001_initial;

use labguard_core::StorageError;
use rusqlite::Connection;
use tracing::info;

/// Current schema version; bump when adding a migration.
pub const SCHEMA_VERSION: i64 = 1;

const MIGRATIONS: &[(i64, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StorageError::Sqlite {
            message: e.to_string(),
        })?;

    for &(version, sql) in MIGRATIONS {
        if version > current {
            conn.execute_batch(sql).map_err(|e| StorageError::Sqlite {
                message: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::Sqlite {
                    message: e.to_string(),
                })?;
            info!(version, "applied schema migration");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }
}
