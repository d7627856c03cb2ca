//! Core module - pure game logic with no external dependencies
//!
//! Board rules, piece geometry, collision, locking, line clears, scoring,
//! and game lifecycle. No UI, networking, or I/O here.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, Piece};
pub use pieces::{spawn_shape, RotationPolicy, Shape};
pub use rng::{FixedPieces, PieceDraw, PieceSource, RandomPieces, SimpleRng};
