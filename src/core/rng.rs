//! Deterministic random number generation.
//!
//! Games use this wherever several equally good answers exist and one has to
//! be picked (for example the tic-tac-toe opening book). The same seed always
//! produces the same sequence, so searches stay reproducible.
//!
//! ```
//! use pocket_minimax::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! let openings = [0u8, 2, 4, 6, 8];
//! assert!(openings.contains(rng.choose(&openings).unwrap()));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
