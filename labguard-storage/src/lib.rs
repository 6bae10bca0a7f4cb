//! labguard-storage: SQLite persistence layer
//!
//! Implements [`labguard_core::QcRepository`] over rusqlite:
//! - Connection: mutex-serialized connection with pragmas and migrations
//! - Migrations: `user_version`-gated schema evolution
//! - Queries: per-table prepared-statement modules
//! - Repository: atomic per-analyte read-modify-write

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod repository;

pub use connection::DatabaseManager;
pub use repository::SqliteRepository;
