//! Canonical Westgard evaluator: fixed priority, first rejection wins.
//!
//! Pure function of (current value, prior history, mean, sd). No state, no
//! clock, no I/O. Callers must supply `prior` sorted ascending by date and
//! must reject non-finite inputs before calling (the session layer does).

use crate::types::Measurement;

use super::types::{Evaluation, WestgardRule};

/// Standardized distance from target: `(value - mean) / sd`.
///
/// Returns `None` when `sd == 0` (no established variance, score undefined).
pub fn z_score(value: f64, mean: f64, sd: f64) -> Option<f64> {
    if sd == 0.0 {
        None
    } else {
        Some((value - mean) / sd)
    }
}

/// Which side of the mean a z-score falls on: +1 above, -1 below, 0 exactly on.
///
/// `f64::signum` maps 0.0 to 1.0, which is wrong here: a point exactly on the
/// mean sits on neither side for the same-side rules.
pub(crate) fn side(z: f64) -> i8 {
    if z > 0.0 {
        1
    } else if z < 0.0 {
        -1
    } else {
        0
    }
}

/// Evaluate the newest measurement against its prior history.
///
/// Rules are checked in fixed priority order and evaluation stops at the
/// first rejection; the 1-2s warning is reported only when no rejection
/// fired. At most one rule code is returned — callers that need every
/// independently true condition use [`super::violations`] instead.
///
/// With `sd == 0` the result is unconditionally OK with no rules.
pub fn evaluate(current_value: f64, prior: &[Measurement], mean: f64, sd: f64) -> Evaluation {
    let Some(cur_z) = z_score(current_value, mean, sd) else {
        return Evaluation::ok();
    };
    let z = |v: f64| (v - mean) / sd;
    let prev_z = prior.last().map(|m| z(m.value)).unwrap_or(0.0);

    // 1-3s: single point beyond 3 SD.
    if cur_z.abs() > 3.0 {
        return Evaluation::rejection(WestgardRule::OneThreeS);
    }

    // 2-2s: two consecutive points beyond 2 SD on the same side.
    if cur_z.abs() > 2.0 && prev_z.abs() > 2.0 && side(cur_z) == side(prev_z) {
        return Evaluation::rejection(WestgardRule::TwoTwoS);
    }

    // R-4s: consecutive points more than 4 SD apart.
    if !prior.is_empty() && (cur_z - prev_z).abs() > 4.0 {
        return Evaluation::rejection(WestgardRule::RangeFourS);
    }

    // 4-1s: last 4 points (3 priors + current) all beyond 1 SD, same side
    // as the current point.
    if prior.len() >= 3 {
        let cur_side = side(cur_z);
        let window = &prior[prior.len() - 3..];
        let all_beyond_1sd = cur_z.abs() > 1.0
            && window.iter().all(|m| {
                let zv = z(m.value);
                zv.abs() > 1.0 && side(zv) == cur_side
            });
        if all_beyond_1sd {
            return Evaluation::rejection(WestgardRule::FourOneS);
        }
    }

    // 10x: last 10 points (9 priors + current) all on the same, non-zero side.
    if prior.len() >= 9 {
        let cur_side = side(cur_z);
        let window = &prior[prior.len() - 9..];
        if cur_side != 0 && window.iter().all(|m| side(z(m.value)) == cur_side) {
            return Evaluation::rejection(WestgardRule::TenX);
        }
    }

    // 1-2s: advisory. 1-3s already excluded |z| > 3 above.
    if cur_z.abs() > 2.0 {
        return Evaluation::warning(WestgardRule::OneTwoS);
    }

    Evaluation::ok()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::westgard::QcStatus;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, n).unwrap()
    }

    /// Build a prior history from z-values with mean 100, sd 10.
    fn history(zs: &[f64]) -> Vec<Measurement> {
        zs.iter()
            .enumerate()
            .map(|(i, &zv)| Measurement::new(format!("m{i}"), day(i as u32 + 1), 100.0 + zv * 10.0))
            .collect()
    }

    #[test]
    fn zero_sd_is_always_ok() {
        let result = evaluate(999.0, &history(&[5.0, -5.0]), 100.0, 0.0);
        assert_eq!(result.status, QcStatus::Ok);
        assert!(result.rules.is_empty());
    }

    #[test]
    fn z_score_none_when_sd_zero() {
        assert_eq!(z_score(50.0, 100.0, 0.0), None);
        assert_eq!(z_score(120.0, 100.0, 10.0), Some(2.0));
    }

    #[test]
    fn beyond_3sd_rejects_regardless_of_history() {
        let result = evaluate(135.0, &[], 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Error);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::OneThreeS]);

        let result = evaluate(65.0, &history(&[0.1, -0.2]), 100.0, 10.0);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::OneThreeS]);
    }

    #[test]
    fn two_consecutive_beyond_2sd_same_side() {
        // prev z = +2.5, current z = +2.2
        let result = evaluate(122.0, &history(&[2.5]), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Error);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::TwoTwoS]);
    }

    #[test]
    fn two_beyond_2sd_opposite_sides_is_r4s_not_2_2s() {
        // prev z = +2.5, current z = -2.5 — span is 5 SD
        let result = evaluate(75.0, &history(&[2.5]), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Error);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::RangeFourS]);
    }

    #[test]
    fn r4s_requires_a_prior_point() {
        // Without a prior point the fallback prev_z = 0 must not produce R-4s.
        let result = evaluate(125.0, &[], 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Warning);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::OneTwoS]);
    }

    #[test]
    fn four_consecutive_beyond_1sd_same_side() {
        let result = evaluate(115.0, &history(&[1.5, 1.5, 1.5]), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Error);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::FourOneS]);
    }

    #[test]
    fn four_1s_needs_current_beyond_1sd_too() {
        let result = evaluate(105.0, &history(&[1.5, 1.5, 1.5]), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Ok);
    }

    #[test]
    fn four_1s_uses_only_most_recent_three_priors() {
        // An older opposite-side point outside the window must not matter.
        let result = evaluate(115.0, &history(&[-1.5, 1.5, 1.5, 1.5]), 100.0, 10.0);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::FourOneS]);
    }

    #[test]
    fn ten_consecutive_same_side() {
        let zs = [0.5; 9];
        let result = evaluate(105.0, &history(&zs), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Error);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::TenX]);
    }

    #[test]
    fn ten_x_not_triggered_when_current_on_mean() {
        let zs = [0.5; 9];
        let result = evaluate(100.0, &history(&zs), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Ok);
    }

    #[test]
    fn ten_x_broken_by_one_point_on_other_side() {
        let zs = [0.5, 0.5, 0.5, 0.5, -0.5, 0.5, 0.5, 0.5, 0.5];
        let result = evaluate(105.0, &history(&zs), 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Ok);
    }

    #[test]
    fn single_point_beyond_2sd_warns() {
        let result = evaluate(121.0, &[], 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Warning);
        assert_eq!(result.rules.as_slice(), &[WestgardRule::OneTwoS]);
    }

    #[test]
    fn single_point_within_1sd_is_ok() {
        let result = evaluate(110.0, &[], 100.0, 10.0);
        assert_eq!(result.status, QcStatus::Ok);
        assert!(result.rules.is_empty());
    }

    #[test]
    fn exactly_on_limits_does_not_fire() {
        // Rule predicates are strict inequalities.
        assert_eq!(evaluate(130.0, &[], 100.0, 10.0).status, QcStatus::Ok); // |z| == 3
        assert_eq!(evaluate(120.0, &[], 100.0, 10.0).status, QcStatus::Ok); // |z| == 2
    }
}
