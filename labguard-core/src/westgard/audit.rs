//! Accumulating rule check for audit and export.
//!
//! Unlike [`super::evaluate`], which stops at the first rejection and reports
//! a single rule, this variant applies every rejection predicate
//! independently and returns all that hold. Export reports use it so a point
//! that simultaneously breaks, say, 2-2s and 4-1s shows both codes.

use crate::types::Measurement;

use super::evaluator::side;
use super::types::{RuleSet, WestgardRule};

/// Return every rule independently violated by the current measurement.
///
/// The 1-2s warning is included only when no rejection fired and
/// `2 < |z| <= 3`, so it never shadows or duplicates a rejection code.
/// With `sd == 0` the result is empty.
pub fn violations(current_value: f64, prior: &[Measurement], mean: f64, sd: f64) -> RuleSet {
    let mut out = RuleSet::new();
    if sd == 0.0 {
        return out;
    }

    let z = |v: f64| (v - mean) / sd;
    let cur_z = z(current_value);
    let prev_z = prior.last().map(|m| z(m.value)).unwrap_or(0.0);

    if cur_z.abs() > 3.0 {
        out.push(WestgardRule::OneThreeS);
    }

    if cur_z.abs() > 2.0 && prev_z.abs() > 2.0 && side(cur_z) == side(prev_z) {
        out.push(WestgardRule::TwoTwoS);
    }

    if !prior.is_empty() && (cur_z - prev_z).abs() > 4.0 {
        out.push(WestgardRule::RangeFourS);
    }

    if prior.len() >= 3 {
        let cur_side = side(cur_z);
        let window = &prior[prior.len() - 3..];
        let all_beyond_1sd = cur_z.abs() > 1.0
            && window.iter().all(|m| {
                let zv = z(m.value);
                zv.abs() > 1.0 && side(zv) == cur_side
            });
        if all_beyond_1sd {
            out.push(WestgardRule::FourOneS);
        }
    }

    if prior.len() >= 9 {
        let cur_side = side(cur_z);
        let window = &prior[prior.len() - 9..];
        if cur_side != 0 && window.iter().all(|m| side(z(m.value)) == cur_side) {
            out.push(WestgardRule::TenX);
        }
    }

    if out.is_empty() && cur_z.abs() > 2.0 && cur_z.abs() <= 3.0 {
        out.push(WestgardRule::OneTwoS);
    }

    out
}
