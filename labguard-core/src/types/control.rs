//! Per-analyte control configuration and Levey-Jennings limits.

use serde::{Deserialize, Serialize};

use super::Measurement;

/// Target statistics and display metadata for one analyte's control.
///
/// `sd == 0` is a valid state (instrument with no established variance);
/// nothing in this crate divides by `sd` without checking it first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Stable key for this analyte, e.g. `"glucose_cal"`.
    pub analyte_id: String,
    /// Human-readable name shown in tables and reports.
    pub display_name: String,
    /// Target center established by instrument/manufacturer.
    pub mean: f64,
    /// Expected spread of acceptable values.
    pub sd: f64,
    /// Display unit, e.g. `"mg/dL"`.
    pub unit: String,
}

impl ControlConfig {
    pub fn new(
        analyte_id: impl Into<String>,
        display_name: impl Into<String>,
        mean: f64,
        sd: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            analyte_id: analyte_id.into(),
            display_name: display_name.into(),
            mean,
            sd,
            unit: unit.into(),
        }
    }

    /// Coefficient of variation as a percentage: `sd / mean * 100`.
    /// Zero when the mean is zero.
    pub fn cv_percent(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            self.sd / self.mean * 100.0
        }
    }

    /// Levey-Jennings chart bands at `mean ± 1/2/3 SD`.
    pub fn limits(&self) -> ControlLimits {
        ControlLimits {
            mean: self.mean,
            plus_1sd: self.mean + self.sd,
            minus_1sd: self.mean - self.sd,
            plus_2sd: self.mean + 2.0 * self.sd,
            minus_2sd: self.mean - 2.0 * self.sd,
            plus_3sd: self.mean + 3.0 * self.sd,
            minus_3sd: self.mean - 3.0 * self.sd,
        }
    }
}

/// Chart/export band values derived from a [`ControlConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub mean: f64,
    pub plus_1sd: f64,
    pub minus_1sd: f64,
    pub plus_2sd: f64,
    pub minus_2sd: f64,
    pub plus_3sd: f64,
    pub minus_3sd: f64,
}

/// One analyte's configuration plus its full measurement history.
///
/// This is the atomic unit of persistence: repositories read, mutate, and
/// write it back as a whole, serializing concurrent edits per analyte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyteRecord {
    pub control: ControlConfig,
    pub measurements: Vec<Measurement>,
}

impl AnalyteRecord {
    /// A record with no measurements yet.
    pub fn empty(control: ControlConfig) -> Self {
        Self {
            control,
            measurements: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cv_percent_handles_zero_mean() {
        let cfg = ControlConfig::new("x", "X", 0.0, 2.0, "U/L");
        assert_eq!(cfg.cv_percent(), 0.0);

        let cfg = ControlConfig::new("x", "X", 112.0, 3.6, "mg/dL");
        assert!((cfg.cv_percent() - 3.214).abs() < 0.001);
    }

    #[test]
    fn limits_are_symmetric_around_mean() {
        let cfg = ControlConfig::new("x", "X", 100.0, 5.0, "mg/dL");
        let limits = cfg.limits();
        assert_eq!(limits.plus_3sd, 115.0);
        assert_eq!(limits.minus_3sd, 85.0);
        assert_eq!(limits.plus_1sd - limits.mean, limits.mean - limits.minus_1sd);
    }
}
