//! Control measurement type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::westgard::{QcStatus, RuleSet};

/// One control measurement for an analyte.
///
/// `z_score`, `status`, and `rules` are derived by re-evaluation and are
/// never authored directly; editing `value` or `date` invalidates them
/// until the owning history is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Opaque identifier, unique within an analyte's history.
    pub id: String,
    /// Calendar date of the run, day granularity.
    pub date: NaiveDate,
    /// Raw measured result.
    pub value: f64,
    /// Optional operator note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Standardized score under the configuration used at last recompute.
    /// `None` until evaluated, or when sd was 0.
    #[serde(default)]
    pub z_score: Option<f64>,
    /// Classification under the configuration used at last recompute.
    #[serde(default)]
    pub status: Option<QcStatus>,
    /// Rule codes violated at last recompute.
    #[serde(default)]
    pub rules: RuleSet,
}

impl Measurement {
    /// A fresh, not-yet-evaluated measurement.
    pub fn new(id: impl Into<String>, date: NaiveDate, value: f64) -> Self {
        Self {
            id: id.into(),
            date,
            value,
            comment: None,
            z_score: None,
            status: None,
            rules: RuleSet::new(),
        }
    }

    /// Attach an operator comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Drop derived fields after a value/date edit, pending recompute.
    pub(crate) fn clear_derived(&mut self) {
        self.z_score = None;
        self.status = None;
        self.rules.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_measurement_has_no_derived_fields() {
        let m = Measurement::new("a", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 101.5);
        assert!(m.z_score.is_none());
        assert!(m.status.is_none());
        assert!(m.rules.is_empty());
        assert!(m.comment.is_none());
    }

    #[test]
    fn serde_round_trip() {
        let m = Measurement::new("a", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 101.5)
            .with_comment("after recalibration");
        let json = serde_json::to_string(&m).unwrap();
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
