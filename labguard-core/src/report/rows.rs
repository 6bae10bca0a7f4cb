//! Tabular report rows for QC export.
//!
//! Rows are computed from raw values under the *current* configuration for
//! the entire export — per-point configuration snapshots are not stored, so
//! mixing historical snapshots would produce an inconsistent table. The
//! status column uses the accumulating audit check so every independently
//! violated rule appears.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::AnalyteRecord;
use crate::westgard;

/// One export row: raw result, standardized score, rule status, and the
/// Levey-Jennings band columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub analyte: String,
    pub date: NaiveDate,
    pub value: f64,
    pub mean: f64,
    pub sd: f64,
    pub unit: String,
    /// Rounded to the configured number of decimal places; 0 when sd is 0.
    pub z_score: f64,
    /// All violated rule codes joined with ", ", or `"OK"`.
    pub westgard_status: String,
    pub plus_1sd: f64,
    pub minus_1sd: f64,
    pub plus_2sd: f64,
    pub minus_2sd: f64,
    pub plus_3sd: f64,
    pub minus_3sd: f64,
}

/// Build export rows for a set of analytes.
///
/// Analytes are ordered by display name; analytes with no measurements are
/// skipped. Within an analyte, rows follow evaluation order (date ascending,
/// ties by id), each point re-checked against the history before it.
pub fn build_rows(records: &[AnalyteRecord], decimal_places: u8) -> Vec<ReportRow> {
    let mut ordered: Vec<&AnalyteRecord> = records
        .iter()
        .filter(|r| !r.measurements.is_empty())
        .collect();
    ordered.sort_by(|a, b| a.control.display_name.cmp(&b.control.display_name));

    let mut rows = Vec::new();
    for record in ordered {
        let control = &record.control;
        let limits = control.limits();

        let mut sorted = record.measurements.clone();
        sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        for (i, point) in sorted.iter().enumerate() {
            let prior = &sorted[..i];
            let violated = westgard::violations(point.value, prior, control.mean, control.sd);
            let status = if violated.is_empty() {
                "OK".to_string()
            } else {
                violated
                    .iter()
                    .map(|r| r.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let z = westgard::z_score(point.value, control.mean, control.sd).unwrap_or(0.0);

            rows.push(ReportRow {
                analyte: control.display_name.clone(),
                date: point.date,
                value: point.value,
                mean: control.mean,
                sd: control.sd,
                unit: control.unit.clone(),
                z_score: round_to(z, decimal_places),
                westgard_status: status,
                plus_1sd: limits.plus_1sd,
                minus_1sd: limits.minus_1sd,
                plus_2sd: limits.plus_2sd,
                minus_2sd: limits.minus_2sd,
                plus_3sd: limits.plus_3sd,
                minus_3sd: limits.minus_3sd,
            });
        }
    }
    rows
}

/// Serialize rows as a JSON array.
pub fn to_json(rows: &[ReportRow]) -> Result<String, crate::errors::ReportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

fn round_to(value: f64, decimal_places: u8) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}
