//! Mastery estimator
//!
//! Two views of learning progress: the persisted `mastery_score` (0-100,
//! updated only on attempts, with diminishing returns on gains), and the
//! read-time "domain" projection that decays the stored score along the
//! retention curve. The projection is never persisted.

use chrono::{DateTime, Utc};

use crate::config::MasteryPolicy;
use crate::retention;

const MASTERY_MAX: f64 = 100.0;

/// Post-attempt mastery score. On success the gain shrinks as the score
/// approaches 100; on failure the score is multiplied down by the error
/// penalty. Result is always within [0, 100].
pub fn apply_attempt(mastery_score: f64, success: bool, policy: &MasteryPolicy) -> f64 {
    let score = mastery_score.clamp(0.0, MASTERY_MAX);

    if success {
        let gain = policy.max_gain_per_session * (1.0 - score / MASTERY_MAX);
        (score + gain).min(MASTERY_MAX)
    } else {
        (score * (1.0 - policy.error_penalty)).max(0.0)
    }
}

/// Read-time projection of mastery decayed by elapsed time since the last
/// review. Zero for a never-reviewed item; otherwise
/// `mastery_score * R(elapsed)`, so it never exceeds the stored score and
/// only decreases between reviews. Deterministic for a fixed `now`.
pub fn current_domain(
    mastery_score: f64,
    stability_days: f64,
    last_reviewed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> f64 {
    let last = match last_reviewed_at {
        Some(ts) => ts,
        None => return 0.0,
    };

    let elapsed_days = (now - last).num_seconds() as f64 / 86_400.0;
    let r = retention::retrievability(stability_days, elapsed_days);
    (mastery_score * r).max(0.0)
}
