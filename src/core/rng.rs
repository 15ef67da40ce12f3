//! RNG module - deterministic piece randomization.
//!
//! A small LCG drives uniform piece selection with replacement (every spawn
//! is an independent draw over the 7 kinds; no bag, no anti-repeat). Seeding
//! pins the whole sequence, which keeps game rollouts reproducible in tests;
//! the binary seeds from wall clock.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // A 0 state would produce a degenerate sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform source of piece kinds.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind, uniformly with replacement.
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state; usable as a seed that continues the stream.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}
