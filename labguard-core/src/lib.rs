//! labguard-core: Westgard QC evaluation engine
//!
//! This crate provides the decision logic for LabGuard:
//! - Westgard: multi-rule evaluation (1-3s, 2-2s, R-4s, 4-1s, 10x, 1-2s)
//! - Types: measurements, control configurations, analyte records
//! - Session: the full-history re-evaluation protocol
//! - Engine: repository-backed orchestration with change events
//! - Report: tabular export rows, CSV and JSON writers
//! - Config: layered application configuration and the default panel
//!
//! The evaluator itself is a pure function; persistence lives behind the
//! [`traits::QcRepository`] seam (SQLite implementation in
//! `labguard-storage`).

pub mod config;
pub mod errors;
pub mod events;
pub mod report;
pub mod session;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod westgard;

// Re-exports for convenience
pub use errors::{ConfigError, ReportError, SessionError, StorageError};
pub use events::{
    ChangeKind, ConfigurationChangedEvent, EventDispatcher, HistoryReevaluatedEvent,
    MeasurementChangedEvent, QcEventHandler,
};
pub use session::{AnalyteSession, QcEngine};
pub use telemetry::init_telemetry;
pub use traits::{MemoryRepository, QcRepository};
pub use types::{AnalyteRecord, ControlConfig, ControlLimits, Measurement};
pub use westgard::{evaluate, violations, z_score, Evaluation, QcStatus, RuleSet, WestgardRule};
