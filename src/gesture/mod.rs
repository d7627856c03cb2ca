//! Gesture module - spatial gesture to discrete command translation
//!
//! Self-contained leaf: no dependency on the game core. The driver loop maps
//! `GestureCommand` values onto engine actions.

pub mod translator;
pub mod zones;

pub use translator::{GestureTranslator, TranslatorConfig};
pub use zones::{classify, GestureCommand, Point, Zone};
