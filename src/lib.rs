//! Gestris: a terminal Tetris driven by keyboard and hand-gesture input.
//!
//! The two cores are independent leaves: `core` owns the board rules,
//! `gesture` owns spatial-to-discrete command translation. The binary's
//! driver loop composes them; `vision` carries fingertip frames in from an
//! external hand-tracking process and `term` draws the state.

pub mod core;
pub mod gesture;
pub mod input;
pub mod term;
pub mod types;
pub mod vision;
