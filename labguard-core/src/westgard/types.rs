//! Westgard rule codes and evaluation results.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Classification of a control measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QcStatus {
    /// Within acceptable limits, no rule fired.
    Ok,
    /// Advisory flag (1-2s), run may continue.
    Warning,
    /// A rejection rule fired, the run should be rejected or repeated.
    Error,
}

impl QcStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QcStatus::Ok => "OK",
            QcStatus::Warning => "WARNING",
            QcStatus::Error => "ERROR",
        }
    }

    /// Inverse of [`Self::as_str`]; `None` for unrecognized text.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "OK" => Some(QcStatus::Ok),
            "WARNING" => Some(QcStatus::Warning),
            "ERROR" => Some(QcStatus::Error),
            _ => None,
        }
    }
}

/// Westgard multi-rule codes, in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WestgardRule {
    /// Single point beyond 3 SD — random error (rejection).
    #[serde(rename = "1-3s")]
    OneThreeS,
    /// Two consecutive points beyond 2 SD on the same side — systematic shift (rejection).
    #[serde(rename = "2-2s")]
    TwoTwoS,
    /// Range between two consecutive points spans more than 4 SD (rejection).
    #[serde(rename = "R-4s")]
    RangeFourS,
    /// Four consecutive points beyond 1 SD on the same side (rejection).
    #[serde(rename = "4-1s")]
    FourOneS,
    /// Ten consecutive points on the same side of the mean (rejection).
    #[serde(rename = "10x")]
    TenX,
    /// Single point beyond 2 SD — advisory only (warning).
    #[serde(rename = "1-2s")]
    OneTwoS,
}

impl WestgardRule {
    /// The conventional code for this rule, e.g. `"1-3s"`.
    pub fn code(&self) -> &'static str {
        match self {
            WestgardRule::OneThreeS => "1-3s",
            WestgardRule::TwoTwoS => "2-2s",
            WestgardRule::RangeFourS => "R-4s",
            WestgardRule::FourOneS => "4-1s",
            WestgardRule::TenX => "10x",
            WestgardRule::OneTwoS => "1-2s",
        }
    }

    /// Whether this rule mandates rejecting the analytical run.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, WestgardRule::OneTwoS)
    }
}

impl fmt::Display for WestgardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Violated rule codes for one measurement.
///
/// The canonical evaluator reports at most one rule; the audit variant can
/// report several, but never more than the inline capacity in practice.
pub type RuleSet = SmallVec<[WestgardRule; 2]>;

/// Outcome of evaluating one measurement against its prior history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: QcStatus,
    pub rules: RuleSet,
}

impl Evaluation {
    /// No rule fired.
    pub fn ok() -> Self {
        Self {
            status: QcStatus::Ok,
            rules: RuleSet::new(),
        }
    }

    pub(crate) fn rejection(rule: WestgardRule) -> Self {
        let mut rules = RuleSet::new();
        rules.push(rule);
        Self {
            status: QcStatus::Error,
            rules,
        }
    }

    pub(crate) fn warning(rule: WestgardRule) -> Self {
        let mut rules = RuleSet::new();
        rules.push(rule);
        Self {
            status: QcStatus::Warning,
            rules,
        }
    }
}
