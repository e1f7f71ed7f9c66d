//! Review-relevant item state and attempt records
//!
//! The engine treats questions and flashcards uniformly through `ReviewItem`;
//! kind-specific payloads (answer options, card faces) stay outside its view.
//! Snapshots are plain serde values so the caller can persist them as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ReviewPolicy;

/// The learner's own rating of recall difficulty, distinct from correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfEval {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl SelfEval {
    /// Maps a raw 0-3 level; anything out of range is treated as `Hard`.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Again,
            1 => Self::Hard,
            2 => Self::Good,
            3 => Self::Easy,
            _ => Self::Hard,
        }
    }
}

/// Bucketed classification of answer speed against a target duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingClass {
    Fast,
    Normal,
    Slow,
}

/// Categorical urgency of a due item, serialized with the application's
/// display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "CRITICO")]
    Critical,
    #[serde(rename = "ATENCAO")]
    Attention,
    #[serde(rename = "OK")]
    Ok,
}

impl Urgency {
    /// Queue tier: CRITICO before ATENCAO before OK.
    pub fn tier(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Attention => 1,
            Self::Ok => 2,
        }
    }
}

/// Immutable record of one completed attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub date: DateTime<Utc>,
    pub was_correct: bool,
    pub mastery_after: f64,
    pub stability_after: f64,
    pub time_sec: f64,
    pub self_eval: SelfEval,
    pub timing: TimingClass,
    pub target_sec: f64,
}

/// A question or flashcard as the engine sees it: the review-relevant fields
/// only. All scheduling fields are written exclusively by `record_attempt`;
/// the flag fields are external priority signals the engine only reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// Memory stability estimate in days, always positive and capped.
    pub stability_days: f64,
    /// Absent only before the first attempt.
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// Always defined; equals creation time for a never-reviewed item.
    pub next_review_date: DateTime<Utc>,
    /// Persisted cumulative mastery, 0-100. Never decayed in place.
    pub mastery_score: f64,
    pub total_attempts: u32,
    pub correct_streak: u32,
    pub last_was_correct: bool,
    /// Item-specific answer-time target; engine falls back to the policy
    /// default when absent or non-positive.
    pub target_sec: Option<f64>,
    pub recent_error: bool,
    pub hot_topic: bool,
    pub is_critical: bool,
    pub is_fundamental: bool,
    pub attempt_history: Vec<AttemptRecord>,
}

impl ReviewItem {
    /// A fresh, immediately-due item with policy defaults.
    pub fn new(now: DateTime<Utc>, policy: &ReviewPolicy) -> Self {
        Self {
            stability_days: policy.intervals.default_stability_days,
            last_reviewed_at: None,
            next_review_date: now,
            mastery_score: 0.0,
            total_attempts: 0,
            correct_streak: 0,
            last_was_correct: false,
            target_sec: None,
            recent_error: false,
            hot_topic: false,
            is_critical: false,
            is_fundamental: false,
            attempt_history: Vec::new(),
        }
    }
}

/// Level/XP progression snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u32,
    /// Fractional progress between the current and next level thresholds,
    /// in percent.
    pub progress_percent: f64,
}
