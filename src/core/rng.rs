//! RNG module - uniform random piece selection
//!
//! Piece selection is a capability: `GameState` draws from a `PieceSource`,
//! so tests can inject a fixed sequence while the game uses `RandomPieces`.
//! Variant and color are independent uniform draws (no bag fairness).
//!
//! The LCG is deliberately simple and deterministic per seed.

use crate::types::{Color, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (reusable as a seed).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// One spawned piece: a variant plus the color it will lock with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDraw {
    pub kind: PieceKind,
    pub color: Color,
}

/// Source of spawn draws.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceDraw;
}

/// Uniform random draws over the 7 variants and 6 colors.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state, usable to restart with the same sequence.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> PieceDraw {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let color = Color::ALL[self.rng.next_range(Color::ALL.len() as u32) as usize];
        PieceDraw { kind, color }
    }
}

/// Fixed cyclic sequence of draws for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedPieces {
    draws: Vec<PieceDraw>,
    next: usize,
}

impl FixedPieces {
    /// Cycle through `draws` forever. Must be non-empty.
    pub fn new(draws: Vec<PieceDraw>) -> Self {
        assert!(!draws.is_empty(), "FixedPieces needs at least one draw");
        Self { draws, next: 0 }
    }

    /// Every draw is the same kind, colored red.
    pub fn repeating(kind: PieceKind) -> Self {
        Self::new(vec![PieceDraw {
            kind,
            color: Color::Red,
        }])
    }
}

impl PieceSource for FixedPieces {
    fn next_piece(&mut self) -> PieceDraw {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_pieces_deterministic_per_seed() {
        let mut a = RandomPieces::new(42);
        let mut b = RandomPieces::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_random_pieces_hits_every_variant() {
        let mut source = RandomPieces::new(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(source.next_piece().kind);
        }
        assert_eq!(seen.len(), PieceKind::ALL.len());
    }

    #[test]
    fn test_fixed_pieces_cycles() {
        let mut source = FixedPieces::new(vec![
            PieceDraw {
                kind: PieceKind::I,
                color: Color::Red,
            },
            PieceDraw {
                kind: PieceKind::O,
                color: Color::Blue,
            },
        ]);

        assert_eq!(source.next_piece().kind, PieceKind::I);
        assert_eq!(source.next_piece().kind, PieceKind::O);
        assert_eq!(source.next_piece().kind, PieceKind::I);
    }
}
