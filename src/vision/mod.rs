//! Vision module - transport for the external hand-tracking pipeline
//!
//! The model itself is an external collaborator; this module only carries
//! its output (a normalized fingertip point per frame, or nothing) into the
//! game loop.

pub mod feed;
pub mod protocol;

pub use feed::{InboundFrame, VisionConfig, VisionFeed};
pub use protocol::FrameMessage;
