//! Per-analyte re-evaluation session.
//!
//! Owns one analyte's record and enforces the re-evaluation protocol: every
//! mutation (insert, edit, delete, target change) triggers a full recompute.
//! Partial recompute is never attempted — the backward-looking rule windows
//! (2-2s, R-4s, 4-1s, 10x) make it unsafe to skip in the general case, and
//! histories are small enough that O(n) per edit is irrelevant.

use chrono::NaiveDate;

use crate::errors::SessionError;
use crate::types::{AnalyteRecord, ControlConfig, Measurement};
use crate::westgard::{self, QcStatus};

/// Mutable view over one analyte's configuration and history.
///
/// Invariant: after any public method returns, the history is sorted
/// ascending by (date, id) and every measurement's derived fields reflect
/// the current configuration and only earlier points.
pub struct AnalyteSession {
    record: AnalyteRecord,
}

impl AnalyteSession {
    /// Wrap a record and bring its classifications up to date.
    pub fn new(record: AnalyteRecord) -> Self {
        let mut session = Self { record };
        session.recompute();
        session
    }

    pub fn control(&self) -> &ControlConfig {
        &self.record.control
    }

    /// History in evaluation order: ascending by date, ties broken by id.
    pub fn measurements(&self) -> &[Measurement] {
        &self.record.measurements
    }

    pub fn record(&self) -> &AnalyteRecord {
        &self.record
    }

    pub fn into_record(self) -> AnalyteRecord {
        self.record
    }

    /// Insert a new measurement and re-evaluate the full history.
    pub fn add(&mut self, measurement: Measurement) -> Result<(), SessionError> {
        ensure_finite("value", measurement.value)?;
        if self
            .record
            .measurements
            .iter()
            .any(|m| m.id == measurement.id)
        {
            return Err(SessionError::DuplicateMeasurement(measurement.id));
        }
        self.record.measurements.push(measurement);
        self.recompute();
        Ok(())
    }

    /// Edit a measurement's value and/or date, then re-evaluate.
    pub fn edit(
        &mut self,
        measurement_id: &str,
        new_value: Option<f64>,
        new_date: Option<NaiveDate>,
    ) -> Result<(), SessionError> {
        if let Some(value) = new_value {
            ensure_finite("value", value)?;
        }
        let m = self
            .record
            .measurements
            .iter_mut()
            .find(|m| m.id == measurement_id)
            .ok_or_else(|| SessionError::UnknownMeasurement(measurement_id.to_string()))?;
        if let Some(value) = new_value {
            m.value = value;
        }
        if let Some(date) = new_date {
            m.date = date;
        }
        m.clear_derived();
        self.recompute();
        Ok(())
    }

    /// Remove a measurement, then re-evaluate. Returns the removed point.
    pub fn remove(&mut self, measurement_id: &str) -> Result<Measurement, SessionError> {
        let idx = self
            .record
            .measurements
            .iter()
            .position(|m| m.id == measurement_id)
            .ok_or_else(|| SessionError::UnknownMeasurement(measurement_id.to_string()))?;
        let removed = self.record.measurements.remove(idx);
        self.recompute();
        Ok(removed)
    }

    /// Edit the target mean/SD, then re-evaluate the full history.
    pub fn set_targets(&mut self, mean: f64, sd: f64) -> Result<(), SessionError> {
        ensure_finite("mean", mean)?;
        ensure_finite("sd", sd)?;
        self.record.control.mean = mean;
        self.record.control.sd = sd;
        self.recompute();
        Ok(())
    }

    /// Number of (rejections, warnings) in the current history.
    pub fn status_counts(&self) -> (usize, usize) {
        let mut rejections = 0;
        let mut warnings = 0;
        for m in &self.record.measurements {
            match m.status {
                Some(QcStatus::Error) => rejections += 1,
                Some(QcStatus::Warning) => warnings += 1,
                _ => {}
            }
        }
        (rejections, warnings)
    }

    /// Sort the history and re-run the evaluator for every point in order,
    /// feeding each point's predecessors forward as its prior history.
    fn recompute(&mut self) {
        let mean = self.record.control.mean;
        let sd = self.record.control.sd;

        self.record
            .measurements
            .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        for i in 0..self.record.measurements.len() {
            let (prior, rest) = self.record.measurements.split_at_mut(i);
            let current = &mut rest[0];
            let evaluation = westgard::evaluate(current.value, prior, mean, sd);
            current.z_score = westgard::z_score(current.value, mean, sd);
            current.status = Some(evaluation.status);
            current.rules = evaluation.rules;
        }
    }
}

pub(super) fn ensure_finite(field: &'static str, value: f64) -> Result<(), SessionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SessionError::NonFiniteValue { field, value })
    }
}
