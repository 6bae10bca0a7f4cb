//! Explicit change hooks replacing UI-driven re-evaluation.
//!
//! The engine emits events after each successful mutation; chart, table,
//! and export layers subscribe instead of watching state transitions.

mod dispatcher;
mod handler;
mod types;

pub use dispatcher::EventDispatcher;
pub use handler::QcEventHandler;
pub use types::{
    ChangeKind, ConfigurationChangedEvent, HistoryReevaluatedEvent, MeasurementChangedEvent,
};
