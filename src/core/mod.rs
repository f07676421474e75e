//! Core engine types: seats, state, actions, RNG, configuration, errors.
//!
//! These are the building blocks the rules operate on. They carry no game
//! logic beyond their own invariants.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, ACTION_SPACE_SIZE};
pub use config::{GameConfig, Variant};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{xorshift32, GameRng};
pub use state::GameState;
