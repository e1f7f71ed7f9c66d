//! Engine entry points - attempt recording and domain projection
//!
//! `record_attempt` is the only write path for the scheduling fields: it
//! takes an item snapshot plus one completed attempt and returns a complete
//! new snapshot, leaving persistence to the caller. Callers serialize
//! attempts per item; the engine holds no state between calls.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::ReviewPolicy;
use crate::mastery;
use crate::retention;
use crate::scheduler;
use crate::stability;
use crate::timing;
use crate::types::{AttemptRecord, ReviewItem, SelfEval, TimingClass};

/// Result of recording one attempt: the new item snapshot plus the
/// intermediate terms the session UI surfaces (timing class, retention at
/// answer time, applied growth rate).
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    pub item: ReviewItem,
    pub timing: TimingClass,
    /// Modeled recall probability at the moment of the attempt; `None` for
    /// a first exposure.
    pub retrievability_at_attempt: Option<f64>,
    /// Growth rate applied to stability; `None` on failure.
    pub growth_rate: Option<f64>,
    pub was_long_gap: bool,
}

/// Applies one completed attempt to an item snapshot.
///
/// Pure over its inputs: the input item is not mutated and the returned
/// snapshot is complete, so session code can batch snapshots and commit
/// them atomically at session end.
pub fn record_attempt(
    item: &ReviewItem,
    was_correct: bool,
    self_eval: SelfEval,
    time_sec: f64,
    policy: &ReviewPolicy,
    now: DateTime<Utc>,
) -> AttemptOutcome {
    let timing_class = timing::classify(time_sec, item.target_sec, &policy.timing);
    let failed = stability::is_failure(was_correct, self_eval);

    let (retrievability_at_attempt, was_long_gap) = match item.last_reviewed_at {
        Some(last) => {
            let elapsed_days = (now - last).num_seconds() as f64 / 86_400.0;
            let scheduled_days = (item.next_review_date - last).num_seconds() as f64 / 86_400.0;
            let long_gap = scheduled_days > 0.0
                && elapsed_days > scheduled_days * (1.0 + policy.long_gap_margin);
            (
                Some(retention::retrievability(item.stability_days, elapsed_days)),
                long_gap,
            )
        }
        None => (None, false),
    };

    let new_stability = stability::update(
        item.stability_days,
        was_correct,
        self_eval,
        timing_class,
        was_long_gap,
        policy,
    );
    let growth_rate = if failed {
        None
    } else {
        Some(stability::effective_growth_rate(
            self_eval,
            timing_class,
            was_long_gap,
            policy,
        ))
    };

    let new_mastery = mastery::apply_attempt(item.mastery_score, !failed, &policy.mastery);

    let next_review_date = if failed {
        scheduler::failure_review_date(now, policy)
    } else {
        scheduler::next_review_date(new_stability, now, policy)
    };

    let target_sec = match item.target_sec {
        Some(t) if t > 0.0 => t,
        _ => policy.timing.default_target_sec,
    };

    let mut updated = item.clone();
    updated.stability_days = new_stability;
    updated.mastery_score = new_mastery;
    updated.last_reviewed_at = Some(now);
    updated.next_review_date = next_review_date;
    updated.total_attempts = item.total_attempts + 1;
    updated.correct_streak = if failed { 0 } else { item.correct_streak + 1 };
    // Streak and stability follow the unified failure rule; the record and
    // last_was_correct keep the answer as given, so an `Again` rating on a
    // correct answer stays visible in the history.
    updated.last_was_correct = was_correct;
    updated.attempt_history.push(AttemptRecord {
        date: now,
        was_correct,
        mastery_after: new_mastery,
        stability_after: new_stability,
        time_sec,
        self_eval,
        timing: timing_class,
        target_sec,
    });

    debug!(
        failed,
        timing = ?timing_class,
        stability_days = format!("{:.2}", new_stability),
        mastery = format!("{:.1}", new_mastery),
        long_gap = was_long_gap,
        "Recorded attempt"
    );

    AttemptOutcome {
        item: updated,
        timing: timing_class,
        retrievability_at_attempt,
        growth_rate,
        was_long_gap,
    }
}

/// Read-time domain projection for an item snapshot. Never persisted.
///
/// Takes the policy like the other read-time operations; the projection
/// itself depends only on the item state and the clock.
pub fn project_domain(item: &ReviewItem, _policy: &ReviewPolicy, now: DateTime<Utc>) -> f64 {
    mastery::current_domain(
        item.mastery_score,
        item.stability_days,
        item.last_reviewed_at,
        now,
    )
}
