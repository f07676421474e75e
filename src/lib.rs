//! # poison-engine
//!
//! Deterministic rules engine for the Poison card game, built for
//! reinforcement-learning environments and front ends.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A `u32` seed drives a xorshift PRNG stored inside the
//!    state. The same seed and the same action ids always replay the same game.
//!
//! 2. **N-Player**: 3-6 seats. Every API takes the player count from the
//!    state's configuration; nothing assumes a fixed table size.
//!
//! 3. **Passive State**: `GameState` is plain data owned by the caller. The
//!    rules (`PoisonGame`) only hold configuration and mutate the state through
//!    `&mut GameState`.
//!
//! ## Architecture
//!
//! - **Fixed Action Space**: Action id = `card_index * 3 + cauldron_index`,
//!   150 ids in total, with a legality mask per state.
//!
//! - **Fixed Observation**: 273 floats per perspective, with full or partial
//!   visibility.
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, errors
//! - `cards`: Card model and deck construction
//! - `zones`: Bounded piles and cauldrons
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Poison game (dealing, turn flow, scoring)
//! - `nn`: Observation encoding for learning code
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod nn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ACTION_SPACE_SIZE,
    GameConfig, Variant, GameError,
    Player, PlayerId, PlayerMap,
    GameRng, GameState,
};

pub use crate::cards::{Card, CardKind, Color, Deck};

pub use crate::zones::{CardPile, Cauldron, Overflow};

pub use crate::rules::{ActionOutcome, GameResult, RulesEngine};

pub use crate::games::poison::{PoisonGame, PoisonGameBuilder, StepResult};

pub use crate::nn::{EncodedState, ObservationMode, PoisonEncoder, StateEncoder, OBSERVATION_SIZE};
