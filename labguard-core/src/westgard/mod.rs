//! Westgard multi-rule evaluation.
//!
//! Two entry points share the same rule predicates:
//! - [`evaluate`] — canonical classification: fixed priority, first
//!   rejection wins, at most one rule reported.
//! - [`violations`] — audit variant: every independently true rule, used by
//!   export reports.

mod audit;
mod evaluator;
mod types;

pub use audit::violations;
pub use evaluator::{evaluate, z_score};
pub use types::{Evaluation, QcStatus, RuleSet, WestgardRule};
