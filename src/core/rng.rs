//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Pure step**: [`xorshift32`] is a plain function of its state
//! - **Serializable**: The whole generator is a single `u32`
//! - **rand-compatible**: Implements `RngCore` so `rand` utilities work on it
//!
//! ## Usage
//!
//! ```
//! use poison_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same permutation
//! let mut rng2 = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Replacement for a zero seed passed to [`GameRng::new`].
pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

/// Replacement for a zero state inside [`xorshift32`].
const ZERO_STATE_REMAP: u32 = 0x6D2B_79F5;

/// One xorshift32 step.
///
/// Returns `(value, new_state)`. A zero state would produce an all-zero
/// stream, so it is remapped to a fixed non-zero constant first.
#[must_use]
pub const fn xorshift32(state: u32) -> (u32, u32) {
    let mut x = if state == 0 { ZERO_STATE_REMAP } else { state };
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    (x, x)
}

/// Deterministic xorshift32 generator.
///
/// Only used for shuffling. There is no hidden global state: a game is fully
/// reproducible from the seed it was built with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is replaced by [`DEFAULT_SEED`].
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Restore a generator from a raw state captured with [`GameRng::state`].
    ///
    /// Unlike [`GameRng::new`], the state is taken verbatim.
    #[must_use]
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current raw state.
    #[must_use]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Fisher-Yates shuffle, last index down to 1.
    ///
    /// Each step draws `next_u32() % (i + 1)`. The exact draw order matters:
    /// decks must be reproducible bit for bit from a seed.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        for i in (1..slice.len()).rev() {
            let j = (self.next_u32() % (i as u32 + 1)) as usize;
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(self)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        let (value, state) = xorshift32(self.state);
        self.state = state;
        value
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GameRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
