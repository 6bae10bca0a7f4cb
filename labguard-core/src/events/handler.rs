//! Handler trait for engine lifecycle events.

use super::types::*;

/// Hooks invoked synchronously after each successful read-modify-write
/// cycle. All methods default to no-ops so handlers implement only what
/// they care about.
pub trait QcEventHandler: Send + Sync {
    fn on_measurement_changed(&self, _event: &MeasurementChangedEvent) {}

    fn on_configuration_changed(&self, _event: &ConfigurationChangedEvent) {}

    fn on_history_reevaluated(&self, _event: &HistoryReevaluatedEvent) {}
}
