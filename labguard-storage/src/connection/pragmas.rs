//! Connection pragmas applied on open.

use labguard_core::StorageError;
use rusqlite::Connection;

/// WAL for concurrent reads during writes, NORMAL sync (safe under WAL),
/// and enforced foreign keys.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA temp_store = MEMORY;",
    )
    .map_err(|e| StorageError::Sqlite {
        message: e.to_string(),
    })
}
