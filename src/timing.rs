//! Response-time classifier
//!
//! Buckets an answer's elapsed time against a target duration. Quick,
//! confident recall is weighted separately from hesitant recall by the
//! stability updater.

use crate::config::TimingPolicy;
use crate::types::TimingClass;

/// Classifies `time_sec` against `target_sec`. Total function: a missing or
/// non-positive target falls back to the policy default, negative times
/// clamp to zero (fast).
pub fn classify(time_sec: f64, target_sec: Option<f64>, timing: &TimingPolicy) -> TimingClass {
    let target = match target_sec {
        Some(t) if t > 0.0 => t,
        _ => timing.default_target_sec,
    };
    let t = time_sec.max(0.0);

    if t <= target * timing.fast_ratio {
        TimingClass::Fast
    } else if t >= target * timing.slow_ratio {
        TimingClass::Slow
    } else {
        TimingClass::Normal
    }
}
