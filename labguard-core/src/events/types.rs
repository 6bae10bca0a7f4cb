//! Event payloads emitted by the engine after successful mutations.

use serde::{Deserialize, Serialize};

/// What kind of mutation touched a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Edited,
    Removed,
}

/// A measurement was inserted, edited, or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementChangedEvent {
    pub analyte_id: String,
    pub measurement_id: String,
    pub kind: ChangeKind,
}

/// An analyte's target mean/SD was edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationChangedEvent {
    pub analyte_id: String,
    pub mean: f64,
    pub sd: f64,
}

/// A full-history recompute finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryReevaluatedEvent {
    pub analyte_id: String,
    pub total_points: usize,
    pub rejections: usize,
    pub warnings: usize,
}
