//! Urgency and priority classification for due-queue ordering
//!
//! Evaluated at read time over item snapshots; nothing here is persisted.
//! CRITICO items (overdue with weak projected domain, or far past the
//! scheduled date) sort before ATENCAO (manually flagged) before OK, and
//! within a tier a weighted priority score orders the queue.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::ReviewPolicy;
use crate::mastery;
use crate::retention;
use crate::types::{ReviewItem, Urgency};

/// Per-tier counts over a collection, consumed by badge/notification code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    pub critical: usize,
    pub attention: usize,
    pub ok: usize,
    pub due: usize,
    pub due_soon: usize,
}

fn lateness_days(item: &ReviewItem, now: DateTime<Utc>) -> f64 {
    (now - item.next_review_date).num_seconds() as f64 / 86_400.0
}

/// Categorical urgency of one item at `now`.
pub fn classify_urgency(item: &ReviewItem, policy: &ReviewPolicy, now: DateTime<Utc>) -> Urgency {
    let overdue = item.next_review_date <= now;
    let domain = mastery::current_domain(
        item.mastery_score,
        item.stability_days,
        item.last_reviewed_at,
        now,
    );

    if (overdue && domain < policy.critical_domain_threshold)
        || lateness_days(item, now) > policy.max_lateness_days
    {
        Urgency::Critical
    } else if item.is_critical {
        Urgency::Attention
    } else {
        Urgency::Ok
    }
}

/// Sortable priority of one item: weighted sum of the external flags plus a
/// low-stability term. Higher is more urgent within a tier.
pub fn priority_score(item: &ReviewItem, policy: &ReviewPolicy) -> f64 {
    let w = &policy.weights;
    let cap = policy.intervals.cap_days.max(f64::MIN_POSITIVE);
    let low_stability = (1.0 - item.stability_days / cap).max(0.0);

    w.hot_topic * f64::from(item.hot_topic as u8)
        + w.fundamental * f64::from(item.is_fundamental as u8)
        + w.critical * f64::from(item.is_critical as u8)
        + w.recent_error * f64::from(item.recent_error as u8)
        + w.low_stability * low_stability
}

/// An item not yet past its scheduled date whose projected retrievability
/// has already fallen below the near threshold. Used for queue pre-fetch.
pub fn is_due_soon(item: &ReviewItem, policy: &ReviewPolicy, now: DateTime<Utc>) -> bool {
    if item.next_review_date <= now {
        return false;
    }
    let last = match item.last_reviewed_at {
        Some(ts) => ts,
        None => return false,
    };
    let elapsed_days = (now - last).num_seconds() as f64 / 86_400.0;
    retention::retrievability(item.stability_days, elapsed_days) < policy.near_retention
}

/// Orders a collection for presentation: CRITICO first, then ATENCAO, then
/// OK; within a tier descending priority, ties broken by most overdue, then
/// weakest projected domain.
pub fn rank_due_queue(
    mut items: Vec<ReviewItem>,
    policy: &ReviewPolicy,
    now: DateTime<Utc>,
) -> Vec<ReviewItem> {
    items.sort_by(|a, b| {
        let tier_a = classify_urgency(a, policy, now).tier();
        let tier_b = classify_urgency(b, policy, now).tier();
        tier_a
            .cmp(&tier_b)
            .then_with(|| {
                priority_score(b, policy)
                    .partial_cmp(&priority_score(a, policy))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.next_review_date.cmp(&b.next_review_date))
            .then_with(|| {
                let domain_a = mastery::current_domain(
                    a.mastery_score,
                    a.stability_days,
                    a.last_reviewed_at,
                    now,
                );
                let domain_b = mastery::current_domain(
                    b.mastery_score,
                    b.stability_days,
                    b.last_reviewed_at,
                    now,
                );
                domain_a
                    .partial_cmp(&domain_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    debug!(queue_len = items.len(), "Ranked due queue");
    items
}

/// Tier and due counts over a collection at `now`.
pub fn queue_stats(items: &[ReviewItem], policy: &ReviewPolicy, now: DateTime<Utc>) -> QueueStats {
    let mut stats = QueueStats::default();
    for item in items {
        match classify_urgency(item, policy, now) {
            Urgency::Critical => stats.critical += 1,
            Urgency::Attention => stats.attention += 1,
            Urgency::Ok => stats.ok += 1,
        }
        if item.next_review_date <= now {
            stats.due += 1;
        } else if is_due_soon(item, policy, now) {
            stats.due_soon += 1;
        }
    }
    stats
}
