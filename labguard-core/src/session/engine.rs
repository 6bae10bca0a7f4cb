//! QcEngine — repository-backed orchestration of QC mutations.
//!
//! The repository is injected once at construction and every operation is a
//! single read-modify-write cycle on one analyte's record. Events are
//! emitted only after the mutated record has been stored.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::seed_panel;
use crate::errors::SessionError;
use crate::events::{
    ChangeKind, ConfigurationChangedEvent, EventDispatcher, HistoryReevaluatedEvent,
    MeasurementChangedEvent, QcEventHandler,
};
use crate::types::{AnalyteRecord, ControlConfig, Measurement};

use super::analyte_session::ensure_finite;
use super::AnalyteSession;

/// Orchestrates sessions over an injected [`crate::traits::QcRepository`].
pub struct QcEngine {
    repo: Arc<dyn crate::traits::QcRepository>,
    events: EventDispatcher,
}

impl QcEngine {
    pub fn new(repo: Arc<dyn crate::traits::QcRepository>) -> Self {
        Self {
            repo,
            events: EventDispatcher::new(),
        }
    }

    /// Register a handler for change/re-evaluation events.
    pub fn register_handler(&mut self, handler: Arc<dyn QcEventHandler>) {
        self.events.register(handler);
    }

    /// Store the default analyte panel for any analyte not yet present.
    /// Returns how many were created.
    pub fn ensure_seeded(&self) -> Result<usize, SessionError> {
        let mut created = 0;
        for control in seed_panel() {
            if self.repo.load(&control.analyte_id)?.is_none() {
                let analyte_id = control.analyte_id.clone();
                self.repo
                    .store(&analyte_id, &AnalyteRecord::empty(control))?;
                created += 1;
            }
        }
        if created > 0 {
            info!(created, "seeded default analyte panel");
        }
        Ok(created)
    }

    /// Create an analyte, or replace an existing analyte's configuration
    /// (keeping and re-evaluating its measurements).
    pub fn register_control(&self, control: ControlConfig) -> Result<(), SessionError> {
        ensure_finite("mean", control.mean)?;
        ensure_finite("sd", control.sd)?;
        let analyte_id = control.analyte_id.clone();
        let (mean, sd) = (control.mean, control.sd);
        match self.repo.load(&analyte_id)? {
            Some(mut record) => {
                record.control = control;
                let session = AnalyteSession::new(record);
                self.store_and_announce(&analyte_id, session)?;
            }
            None => {
                self.repo
                    .store(&analyte_id, &AnalyteRecord::empty(control))?;
            }
        }
        self.events
            .emit_configuration_changed(&ConfigurationChangedEvent {
                analyte_id,
                mean,
                sd,
            });
        Ok(())
    }

    /// One analyte's record with classifications up to date.
    pub fn history(&self, analyte_id: &str) -> Result<AnalyteRecord, SessionError> {
        let record = self.load_required(analyte_id)?;
        Ok(AnalyteSession::new(record).into_record())
    }

    pub fn list_analytes(&self) -> Result<Vec<String>, SessionError> {
        Ok(self.repo.list_analytes()?)
    }

    /// Insert a measurement with a generated id. Returns the stored point
    /// with its freshly computed classification.
    pub fn add_measurement(
        &self,
        analyte_id: &str,
        date: NaiveDate,
        value: f64,
        comment: Option<&str>,
    ) -> Result<Measurement, SessionError> {
        let mut measurement = Measurement::new(Uuid::new_v4().to_string(), date, value);
        if let Some(comment) = comment {
            measurement = measurement.with_comment(comment);
        }
        let measurement_id = measurement.id.clone();

        let mut session = AnalyteSession::new(self.load_required(analyte_id)?);
        session.add(measurement)?;
        let stored = session
            .measurements()
            .iter()
            .find(|m| m.id == measurement_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownMeasurement(measurement_id.clone()))?;
        self.store_and_announce(analyte_id, session)?;

        self.events.emit_measurement_changed(&MeasurementChangedEvent {
            analyte_id: analyte_id.to_string(),
            measurement_id,
            kind: ChangeKind::Added,
        });
        Ok(stored)
    }

    /// Edit a measurement's value and/or date.
    pub fn edit_measurement(
        &self,
        analyte_id: &str,
        measurement_id: &str,
        new_value: Option<f64>,
        new_date: Option<NaiveDate>,
    ) -> Result<(), SessionError> {
        let mut session = AnalyteSession::new(self.load_required(analyte_id)?);
        session.edit(measurement_id, new_value, new_date)?;
        self.store_and_announce(analyte_id, session)?;

        self.events.emit_measurement_changed(&MeasurementChangedEvent {
            analyte_id: analyte_id.to_string(),
            measurement_id: measurement_id.to_string(),
            kind: ChangeKind::Edited,
        });
        Ok(())
    }

    /// Delete a measurement.
    pub fn delete_measurement(
        &self,
        analyte_id: &str,
        measurement_id: &str,
    ) -> Result<(), SessionError> {
        let mut session = AnalyteSession::new(self.load_required(analyte_id)?);
        session.remove(measurement_id)?;
        self.store_and_announce(analyte_id, session)?;

        self.events.emit_measurement_changed(&MeasurementChangedEvent {
            analyte_id: analyte_id.to_string(),
            measurement_id: measurement_id.to_string(),
            kind: ChangeKind::Removed,
        });
        Ok(())
    }

    /// Edit an analyte's target mean/SD, recomputing its whole history.
    pub fn update_control(
        &self,
        analyte_id: &str,
        mean: f64,
        sd: f64,
    ) -> Result<(), SessionError> {
        let mut session = AnalyteSession::new(self.load_required(analyte_id)?);
        session.set_targets(mean, sd)?;
        self.store_and_announce(analyte_id, session)?;

        self.events
            .emit_configuration_changed(&ConfigurationChangedEvent {
                analyte_id: analyte_id.to_string(),
                mean,
                sd,
            });
        Ok(())
    }

    fn load_required(&self, analyte_id: &str) -> Result<AnalyteRecord, SessionError> {
        self.repo
            .load(analyte_id)?
            .ok_or_else(|| SessionError::UnknownAnalyte(analyte_id.to_string()))
    }

    /// Persist a session's record and emit the re-evaluation summary.
    fn store_and_announce(
        &self,
        analyte_id: &str,
        session: AnalyteSession,
    ) -> Result<(), SessionError> {
        let (rejections, warnings) = session.status_counts();
        let record = session.into_record();
        self.repo.store(analyte_id, &record)?;
        debug!(
            analyte_id,
            points = record.measurements.len(),
            rejections,
            warnings,
            "history re-evaluated"
        );
        self.events.emit_history_reevaluated(&HistoryReevaluatedEvent {
            analyte_id: analyte_id.to_string(),
            total_points: record.measurements.len(),
            rejections,
            warnings,
        });
        Ok(())
    }
}
