//! Wire protocol for the vision feed.
//!
//! The external vision process (camera + hand-landmark model) streams one
//! line-delimited JSON object per sampled frame:
//!
//! ```text
//! {"ts_ms": 1712, "x": 0.42, "y": 0.77}
//! {"ts_ms": 1745}
//! ```
//!
//! `x`/`y` are normalized to [0, 1]; omitting them means no hand was
//! detected in that frame.

use serde::{Deserialize, Serialize};

/// One fingertip sample from the vision process.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameMessage {
    /// Sender-side sample time in milliseconds, for diagnostics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

impl FrameMessage {
    /// Normalized point, present only when both coordinates are.
    pub fn point(&self) -> Option<(f32, f32)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}
