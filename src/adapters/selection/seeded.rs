//! Seedable pseudo-random selection strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::SelectionStrategy;

/// Pseudo-random selection backed by a seedable RNG.
///
/// Production uses [`SeededSelection::from_entropy`]; tests pin a seed
/// with [`SeededSelection::seeded`] so a specific response can be
/// asserted.
pub struct SeededSelection {
    rng: StdRng,
}

impl SeededSelection {
    /// Creates a strategy seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a strategy with a fixed seed for reproducible picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SelectionStrategy for SeededSelection {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}
