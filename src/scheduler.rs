//! Scheduler - converts stability and policy into a concrete next-review date
//!
//! Solves the retention curve for the elapsed time at which retrievability
//! falls to the target, clamps it to the configured bounds, then compresses
//! the interval on exam day and exam eve.

use chrono::{DateTime, Duration, Utc};

use crate::config::ReviewPolicy;
use crate::retention;

/// Next review date after a successful attempt, computed from the
/// post-update stability.
pub fn next_review_date(
    stability_days: f64,
    now: DateTime<Utc>,
    policy: &ReviewPolicy,
) -> DateTime<Utc> {
    let bounds = &policy.intervals;

    let mut t_star = retention::days_until_retention(stability_days, policy.target_retention);
    t_star = t_star.clamp(bounds.min_days, bounds.cap_days);

    if let Some(exam) = policy.exam.exam_date {
        let today = now.date_naive();
        if today == exam {
            t_star *= policy.exam.day_factor;
        } else if exam.pred_opt() == Some(today) {
            t_star *= policy.exam.eve_factor;
        }
    }

    now + days_to_duration(t_star)
}

/// Fixed short re-review delay after a failed attempt.
pub fn failure_review_date(now: DateTime<Utc>, policy: &ReviewPolicy) -> DateTime<Utc> {
    now + days_to_duration(policy.intervals.fail_delay_days)
}

fn days_to_duration(days: f64) -> Duration {
    Duration::seconds((days.max(0.0) * 86_400.0).round() as i64)
}
