//! # revisao-engine - spaced-repetition scheduling and mastery estimation
//!
//! Pure scheduling core for an exam-preparation application: given a
//! learner's history on a question or flashcard, it estimates current
//! mastery, decides when the item should next be presented, and ranks due
//! items by urgency. Storage, timers and rendering are external
//! collaborators; every operation here is a pure function of
//! (item snapshot, attempt event, policy, now).
//!
//! ## Module structure
//!
//! - [`config`] - `ReviewPolicy`, the immutable tunable-parameter snapshot
//! - [`types`] - item snapshots, attempt records, classification enums
//! - [`retention`] - exponential forgetting curve and its inverse
//! - [`timing`] - response-time bucketing against a target duration
//! - [`stability`] - the per-attempt reinforcement rule
//! - [`mastery`] - persisted mastery score and read-time domain projection
//! - [`scheduler`] - next-review dates with exam-proximity compression
//! - [`priority`] - CRITICO/ATENCAO/OK urgency and due-queue ranking
//! - [`progression`] - level/XP progression
//! - [`engine`] - `record_attempt` / `project_domain` entry points
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use revisao_engine::{record_attempt, rank_due_queue, ReviewItem, ReviewPolicy, SelfEval};
//!
//! let policy = ReviewPolicy::default();
//! let now = Utc::now();
//! let item = ReviewItem::new(now, &policy);
//!
//! let outcome = record_attempt(&item, true, SelfEval::Good, 12.0, &policy, now);
//! assert!(outcome.item.next_review_date > now);
//!
//! let queue = rank_due_queue(vec![outcome.item], &policy, now);
//! assert_eq!(queue.len(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod mastery;
pub mod priority;
pub mod progression;
pub mod retention;
pub mod scheduler;
pub mod stability;
pub mod timing;
pub mod types;

pub use config::{
    ExamPolicy, GrowthRates, IntervalBounds, MasteryPolicy, PolicyError, PriorityWeights,
    ReviewPolicy, TimingPolicy,
};
pub use engine::{project_domain, record_attempt, AttemptOutcome};
pub use priority::{classify_urgency, is_due_soon, priority_score, queue_stats, rank_due_queue, QueueStats};
pub use progression::level_info;
pub use retention::{days_until_retention, retrievability};
pub use types::{AttemptRecord, LevelInfo, ReviewItem, SelfEval, TimingClass, Urgency};
