//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Which actions are legal
//! - How actions modify state
//! - When the game is over and who won
//!
//! Action enumeration and the legal-action mask are derived from the
//! legality check, so they can never disagree with it.

pub mod engine;

pub use engine::{ActionOutcome, GameResult, RulesEngine};
