//! Domain types: measurements, control configurations, analyte records.

mod control;
mod measurement;

pub use control::{AnalyteRecord, ControlConfig, ControlLimits};
pub use measurement::Measurement;
