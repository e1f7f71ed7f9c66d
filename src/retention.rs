//! Retention model - exponential forgetting curve
//!
//! R(t) = e^(-t / S) where S is the stability estimate in days.
//! Strictly decreasing in t for fixed S, with R(0) = 1.

/// Floor for stability to keep the curve defined on malformed input.
const MIN_STABILITY: f64 = 1e-6;

/// Modeled probability of successful recall after `elapsed_days`.
///
/// Total function: non-positive stability is substituted with a minimal
/// value, negative elapsed time is clamped to zero.
pub fn retrievability(stability_days: f64, elapsed_days: f64) -> f64 {
    let s = stability_days.max(MIN_STABILITY);
    let t = elapsed_days.max(0.0);
    (-t / s).exp()
}

/// Elapsed time, in days, at which retrievability decays to `target`.
///
/// Inverse of the decay curve: t* = -S * ln(target).
pub fn days_until_retention(stability_days: f64, target: f64) -> f64 {
    let s = stability_days.max(MIN_STABILITY);
    let r = target.clamp(0.0001, 0.9999);
    -s * r.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn full_retention_at_zero_elapsed() {
        assert!((retrievability(10.0, 0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn strictly_decreasing_in_elapsed_time() {
        let r1 = retrievability(10.0, 1.0);
        let r5 = retrievability(10.0, 5.0);
        let r20 = retrievability(10.0, 20.0);
        assert!(r1 > r5);
        assert!(r5 > r20);
    }

    #[test]
    fn higher_stability_retains_more() {
        assert!(retrievability(20.0, 7.0) > retrievability(5.0, 7.0));
    }

    #[test]
    fn negative_elapsed_clamps_to_full_retention() {
        assert!((retrievability(10.0, -3.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn non_positive_stability_stays_defined() {
        let r = retrievability(0.0, 1.0);
        assert!(r.is_finite());
        assert!(r >= 0.0 && r <= 1.0);

        let r_neg = retrievability(-5.0, 1.0);
        assert!(r_neg.is_finite());
    }

    #[test]
    fn extreme_decay_saturates_at_zero_without_reordering() {
        // Once t/s exceeds exp's representable range the curve flattens
        // to exactly 0.0; later samples must never come out larger.
        let r_far = retrievability(0.001, 200.0);
        let r_farther = retrievability(0.001, 300.0);
        assert_eq!(r_far, 0.0);
        assert!(r_farther <= r_far);
    }

    #[test]
    fn inverse_recovers_target() {
        let t_star = days_until_retention(10.0, 0.9);
        let r = retrievability(10.0, t_star);
        assert!((r - 0.9).abs() < 1e-9);
    }

    #[test]
    fn inverse_formula_precision() {
        // t* = -S ln(R): S=10, R=0.9 -> 10 * 0.105360 ≈ 1.0536
        let t_star = days_until_retention(10.0, 0.9);
        let expected = -10.0 * 0.9f64.ln();
        assert!((t_star - expected).abs() < EPSILON);
    }

    #[test]
    fn lower_target_waits_longer() {
        assert!(days_until_retention(10.0, 0.7) > days_until_retention(10.0, 0.9));
    }
}
