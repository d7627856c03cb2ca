//! Scoring module - line-clear points, leveling, gravity cadence
//!
//! A simultaneous multi-line clear is a single award: `lines * 100 * level`,
//! evaluated with the level in effect *before* the clear is counted toward
//! leveling. Level is `total_lines / 10 + 1`, starting at 1.

use crate::types::{
    GRAVITY_BASE_FRAMES, GRAVITY_FRAMES_PER_LEVEL, GRAVITY_MIN_FRAMES, LINES_PER_LEVEL,
    LINE_POINTS,
};

/// Points for clearing `lines` rows at once at the given (pre-update) level.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines * LINE_POINTS * level
}

/// Level reached after `total_lines` cumulative cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Milliseconds between gravity drop steps at the given level.
///
/// The cadence is frame-based: `max(50 - 3 * level, 10)` frames at 60 FPS.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let frames = GRAVITY_BASE_FRAMES
        .saturating_sub(GRAVITY_FRAMES_PER_LEVEL.saturating_mul(level))
        .max(GRAVITY_MIN_FRAMES);
    frames * 1000 / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 200);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
        assert_eq!(line_clear_score(0, 5), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_gravity_interval_shrinks_with_level() {
        assert_eq!(gravity_interval_ms(1), 47 * 1000 / 60);
        assert!(gravity_interval_ms(2) < gravity_interval_ms(1));
        // Floor at 10 frames.
        assert_eq!(gravity_interval_ms(14), 10 * 1000 / 60);
        assert_eq!(gravity_interval_ms(100), 10 * 1000 / 60);
    }
}
