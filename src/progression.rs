//! Level/XP progression
//!
//! Cumulative XP thresholds grow quadratically: reaching level n requires
//! `XP_SCALE * (n - 1)^2` total XP, so each level costs more than the last.

use crate::types::LevelInfo;

const XP_SCALE: f64 = 100.0;

/// Cumulative XP required to reach `level` (level 1 is free).
fn threshold(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    XP_SCALE * steps * steps
}

/// Level and fractional progress toward the next level. Total: negative XP
/// clamps to zero.
pub fn level_info(xp: f64) -> LevelInfo {
    let xp = xp.max(0.0);

    let level = (xp / XP_SCALE).sqrt().floor() as u32 + 1;
    let current = threshold(level);
    let next = threshold(level + 1);

    let progress_percent = ((xp - current) / (next - current) * 100.0).clamp(0.0, 100.0);

    LevelInfo {
        level,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn zero_xp_is_level_one_no_progress() {
        let info = level_info(0.0);
        assert_eq!(info.level, 1);
        assert!((info.progress_percent - 0.0).abs() < EPSILON);
    }

    #[test]
    fn negative_xp_clamps_to_zero() {
        let info = level_info(-500.0);
        assert_eq!(info.level, 1);
        assert!((info.progress_percent - 0.0).abs() < EPSILON);
    }

    #[test]
    fn thresholds_grow_quadratically() {
        // Level 2 at 100, level 3 at 400, level 4 at 900.
        assert_eq!(level_info(99.9).level, 1);
        assert_eq!(level_info(100.0).level, 2);
        assert_eq!(level_info(399.9).level, 2);
        assert_eq!(level_info(400.0).level, 3);
        assert_eq!(level_info(900.0).level, 4);
    }

    #[test]
    fn progress_is_fraction_between_thresholds() {
        // Halfway between level 2 (100) and level 3 (400).
        let info = level_info(250.0);
        assert_eq!(info.level, 2);
        assert!((info.progress_percent - 50.0).abs() < EPSILON);
    }

    #[test]
    fn level_is_monotonic_in_xp() {
        let mut last = 0;
        for xp in (0..5000).step_by(50) {
            let level = level_info(xp as f64).level;
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn progress_stays_in_percent_range() {
        for xp in [0.0, 1.0, 99.9, 100.0, 250.0, 12345.6] {
            let info = level_info(xp);
            assert!(info.progress_percent >= 0.0);
            assert!(info.progress_percent <= 100.0);
        }
    }
}
