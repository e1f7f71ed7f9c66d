//! Stability updater - the reinforcement rule
//!
//! After each attempt the stability estimate is adjusted from correctness,
//! the learner's self-rating, the timing class, and whether the attempt
//! landed well past its scheduled date. Failure resets toward a short
//! interval; success grows multiplicatively at a rating-selected rate.

use crate::config::ReviewPolicy;
use crate::types::{SelfEval, TimingClass};

/// An attempt counts as failed when the answer was wrong or the learner
/// rated the recall "again", whichever comes first.
pub fn is_failure(was_correct: bool, self_eval: SelfEval) -> bool {
    !was_correct || self_eval == SelfEval::Again
}

/// Effective growth rate for a successful attempt: the rating's base alpha,
/// raised on fast recall, cut (never below the hard rate) on slow recall,
/// raised again after a long gap.
pub fn effective_growth_rate(
    self_eval: SelfEval,
    timing: TimingClass,
    is_long_gap: bool,
    policy: &ReviewPolicy,
) -> f64 {
    let base = match self_eval {
        // Out-of-range input is mapped to Hard before reaching here; Again
        // is the failure path and gets the hard rate defensively.
        SelfEval::Again | SelfEval::Hard => policy.growth.hard,
        SelfEval::Good => policy.growth.good,
        SelfEval::Easy => policy.growth.easy,
    };

    let mut alpha = match timing {
        TimingClass::Fast => base + policy.timing.fast_bonus,
        TimingClass::Normal => base,
        TimingClass::Slow => (base * (1.0 - policy.timing.slow_rate_cut)).max(policy.growth.hard),
    };

    if is_long_gap {
        // Recalling after drifting past the planned date is stronger
        // evidence of durable memory.
        alpha += policy.long_gap_bonus;
    }

    alpha
}

/// Computes the post-attempt stability. Never panics: out-of-range ratings
/// were already normalized and the result is clamped to the policy bounds.
pub fn update(
    stability_days: f64,
    was_correct: bool,
    self_eval: SelfEval,
    timing: TimingClass,
    is_long_gap: bool,
    policy: &ReviewPolicy,
) -> f64 {
    let bounds = &policy.intervals;

    if is_failure(was_correct, self_eval) {
        return (stability_days * policy.failure_shrink).max(bounds.min_days);
    }

    let alpha = effective_growth_rate(self_eval, timing, is_long_gap, policy);
    (stability_days * (1.0 + alpha)).clamp(bounds.min_days, bounds.cap_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn policy() -> ReviewPolicy {
        ReviewPolicy::default()
    }

    #[test]
    fn failure_shrinks_stability() {
        let p = policy();
        let s = update(10.0, false, SelfEval::Good, TimingClass::Normal, false, &p);
        assert!((s - 10.0 * p.failure_shrink).abs() < EPSILON);
        assert!(s < 10.0);
    }

    #[test]
    fn again_rating_counts_as_failure_even_when_correct() {
        let p = policy();
        let s = update(10.0, true, SelfEval::Again, TimingClass::Normal, false, &p);
        assert!(s < 10.0);
    }

    #[test]
    fn failure_respects_interval_floor() {
        let p = policy();
        let s = update(
            p.intervals.min_days,
            false,
            SelfEval::Again,
            TimingClass::Normal,
            false,
            &p,
        );
        assert!((s - p.intervals.min_days).abs() < EPSILON);
    }

    #[test]
    fn success_grows_by_rating() {
        let p = policy();
        let hard = update(4.0, true, SelfEval::Hard, TimingClass::Normal, false, &p);
        let good = update(4.0, true, SelfEval::Good, TimingClass::Normal, false, &p);
        let easy = update(4.0, true, SelfEval::Easy, TimingClass::Normal, false, &p);
        assert!(hard > 4.0);
        assert!(good > hard);
        assert!(easy > good);
        assert!((easy - 4.0 * (1.0 + p.growth.easy)).abs() < EPSILON);
    }

    #[test]
    fn fast_recall_reinforces_more() {
        let p = policy();
        let normal = update(4.0, true, SelfEval::Easy, TimingClass::Normal, false, &p);
        let fast = update(4.0, true, SelfEval::Easy, TimingClass::Fast, false, &p);
        assert!(fast > normal);
        assert!((fast - 4.0 * (1.0 + p.growth.easy + p.timing.fast_bonus)).abs() < EPSILON);
    }

    #[test]
    fn slow_recall_reinforces_less_but_not_below_hard_rate() {
        let p = policy();
        let normal = update(4.0, true, SelfEval::Easy, TimingClass::Normal, false, &p);
        let slow = update(4.0, true, SelfEval::Easy, TimingClass::Slow, false, &p);
        assert!(slow < normal);

        // Even a slow hard-rated success keeps at least the hard rate.
        let slow_hard = effective_growth_rate(SelfEval::Hard, TimingClass::Slow, false, &p);
        assert!(slow_hard >= p.growth.hard - EPSILON);
    }

    #[test]
    fn long_gap_success_gets_bonus() {
        let p = policy();
        let base = update(4.0, true, SelfEval::Good, TimingClass::Normal, false, &p);
        let gapped = update(4.0, true, SelfEval::Good, TimingClass::Normal, true, &p);
        assert!(gapped > base);
        assert!(
            (gapped - 4.0 * (1.0 + p.growth.good + p.long_gap_bonus)).abs() < EPSILON
        );
    }

    #[test]
    fn growth_never_exceeds_cap() {
        let p = policy();
        let mut s = 4.0;
        for _ in 0..100 {
            s = update(s, true, SelfEval::Easy, TimingClass::Fast, true, &p);
        }
        assert!(s <= p.intervals.cap_days + EPSILON);
    }

    #[test]
    fn consecutive_easy_strictly_increase_until_cap() {
        let p = policy();
        let mut s = 1.0;
        for _ in 0..20 {
            let next = update(s, true, SelfEval::Easy, TimingClass::Normal, false, &p);
            if next < p.intervals.cap_days {
                assert!(next > s);
            }
            s = next;
        }
    }
}
