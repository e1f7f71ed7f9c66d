//! Review policy - the tunable parameter surface of the engine
//!
//! The surrounding application owns a settings store; the engine only ever
//! sees an immutable `ReviewPolicy` snapshot threaded through each call.
//! Every field carries a default so a caller can always start from
//! `ReviewPolicy::default()` and override selectively.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-rating stability growth rates. Must satisfy `hard <= good <= easy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthRates {
    pub hard: f64,
    pub good: f64,
    pub easy: f64,
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self {
            hard: 0.05,
            good: 0.18,
            easy: 0.35,
        }
    }
}

/// Response-time classification thresholds, as fractions of the target time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingPolicy {
    /// `time <= target * fast_ratio` classifies as fast.
    pub fast_ratio: f64,
    /// `time >= target * slow_ratio` classifies as slow.
    pub slow_ratio: f64,
    /// Added to the growth rate on a fast correct answer.
    pub fast_bonus: f64,
    /// Fraction subtracted from the growth rate on a slow correct answer.
    pub slow_rate_cut: f64,
    /// Fallback target when the item carries none (or a malformed one).
    pub default_target_sec: f64,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self {
            fast_ratio: 0.6,
            slow_ratio: 1.5,
            fast_bonus: 0.08,
            slow_rate_cut: 0.5,
            default_target_sec: 30.0,
        }
    }
}

/// Interval floor/ceiling and the fixed delays around them, in days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntervalBounds {
    pub min_days: f64,
    pub cap_days: f64,
    /// Stability assigned to a freshly created item.
    pub default_stability_days: f64,
    /// Fixed re-review delay after a failed attempt.
    pub fail_delay_days: f64,
}

impl Default for IntervalBounds {
    fn default() -> Self {
        Self {
            min_days: 1.0,
            cap_days: 180.0,
            default_stability_days: 1.0,
            fail_delay_days: 1.0,
        }
    }
}

/// Exam-proximity compression. Factors multiply the computed interval,
/// forcing more frequent contact as the exam nears.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamPolicy {
    pub exam_date: Option<NaiveDate>,
    pub day_factor: f64,
    pub eve_factor: f64,
}

impl Default for ExamPolicy {
    fn default() -> Self {
        Self {
            exam_date: None,
            day_factor: 0.30,
            eve_factor: 0.50,
        }
    }
}

/// Weights for the sortable priority score of a due item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityWeights {
    pub hot_topic: f64,
    pub fundamental: f64,
    pub critical: f64,
    pub recent_error: f64,
    pub low_stability: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            hot_topic: 2.0,
            fundamental: 1.5,
            critical: 3.0,
            recent_error: 2.5,
            low_stability: 1.0,
        }
    }
}

/// Mastery-score update parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryPolicy {
    /// Maximum score gain for a single successful attempt (at mastery 0).
    pub max_gain_per_session: f64,
    /// Multiplicative penalty level applied on failure, in (0,1).
    pub error_penalty: f64,
}

impl Default for MasteryPolicy {
    fn default() -> Self {
        Self {
            max_gain_per_session: 15.0,
            error_penalty: 0.30,
        }
    }
}

/// Complete, immutable policy snapshot consumed by every engine operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewPolicy {
    /// Retrievability at which an item becomes due (target_R).
    pub target_retention: f64,
    /// Retrievability below which an item counts as "due soon".
    pub near_retention: f64,
    pub growth: GrowthRates,
    /// Stability multiplier on a failed attempt, in (0,1).
    pub failure_shrink: f64,
    pub timing: TimingPolicy,
    /// Added to the growth rate when a correct answer lands well past the
    /// scheduled review date.
    pub long_gap_bonus: f64,
    /// Margin over the scheduled interval before a gap counts as long.
    pub long_gap_margin: f64,
    pub intervals: IntervalBounds,
    pub exam: ExamPolicy,
    pub weights: PriorityWeights,
    pub mastery: MasteryPolicy,
    /// Projected domain below which an overdue item is CRITICO.
    pub critical_domain_threshold: f64,
    /// Overdue-ness beyond which an item is CRITICO regardless of domain.
    pub max_lateness_days: f64,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self {
            target_retention: 0.90,
            near_retention: 0.92,
            growth: GrowthRates::default(),
            failure_shrink: 0.35,
            timing: TimingPolicy::default(),
            long_gap_bonus: 0.10,
            long_gap_margin: 0.25,
            intervals: IntervalBounds::default(),
            exam: ExamPolicy::default(),
            weights: PriorityWeights::default(),
            mastery: MasteryPolicy::default(),
            critical_domain_threshold: 40.0,
            max_lateness_days: 7.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("interval bounds invalid: min {min} must be positive and not above cap {cap}")]
    Intervals { min: f64, cap: f64 },
    #[error("failure shrink must be in (0,1), got {0}")]
    FailureShrink(f64),
    #[error("growth rates must satisfy 0 < hard <= good <= easy, got {hard}/{good}/{easy}")]
    GrowthOrder { hard: f64, good: f64, easy: f64 },
    #[error("retention targets must be in (0,1), got target {target}, near {near}")]
    Retention { target: f64, near: f64 },
    #[error("exam factors must be in (0,1], got day {day}, eve {eve}")]
    ExamFactors { day: f64, eve: f64 },
}

impl ReviewPolicy {
    /// Checks a deserialized settings snapshot for structurally impossible
    /// values. The engine itself never re-validates; callers run this once
    /// when loading configuration.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let b = &self.intervals;
        if !(b.min_days > 0.0 && b.min_days <= b.cap_days) {
            return Err(PolicyError::Intervals {
                min: b.min_days,
                cap: b.cap_days,
            });
        }
        if !(self.failure_shrink > 0.0 && self.failure_shrink < 1.0) {
            return Err(PolicyError::FailureShrink(self.failure_shrink));
        }
        let g = &self.growth;
        if !(g.hard > 0.0 && g.hard <= g.good && g.good <= g.easy) {
            return Err(PolicyError::GrowthOrder {
                hard: g.hard,
                good: g.good,
                easy: g.easy,
            });
        }
        if !(self.target_retention > 0.0
            && self.target_retention < 1.0
            && self.near_retention > 0.0
            && self.near_retention < 1.0)
        {
            return Err(PolicyError::Retention {
                target: self.target_retention,
                near: self.near_retention,
            });
        }
        let e = &self.exam;
        if !(e.day_factor > 0.0 && e.day_factor <= 1.0 && e.eve_factor > 0.0 && e.eve_factor <= 1.0)
        {
            return Err(PolicyError::ExamFactors {
                day: e.day_factor,
                eve: e.eve_factor,
            });
        }
        Ok(())
    }
}
