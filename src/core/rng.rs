//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces the same shuffle sequence
//! - **Serializable**: O(1) state capture and restore for reproducing games
//!
//! Fisher-Yates is what `SliceRandom::shuffle` implements, so the uniform
//! permutation the engine needs falls out of the rand API directly.
//!
//! ## Usage
//!
//! ```
//! use eight_puzzle::core::PuzzleRng;
//!
//! let mut rng = PuzzleRng::new(42);
//! let mut cells = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! rng.shuffle(&mut cells);
//!
//! // Same seed, same permutation
//! let mut rng2 = PuzzleRng::new(42);
//! let mut cells2 = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! rng2.shuffle(&mut cells2);
//! assert_eq!(cells, cells2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used for board shuffles.
///
/// ChaCha8 keeps the stream fast while staying reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still observable through [`PuzzleRng::seed`], so a
    /// game remains reproducible after the fact.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place with a uniform Fisher-Yates permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// values have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
