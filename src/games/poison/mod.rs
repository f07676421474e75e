//! Poison, the potion-brewing trick-avoidance card game.
//!
//! Players take turns placing cards from their hands into three shared
//! cauldrons:
//! - Potions must match the cauldron's color; each color lives in at most one
//!   cauldron
//! - Poison is colorless and goes anywhere
//! - A cauldron whose total passes 13 overflows: the player who overflowed it
//!   collects every card except the one just played
//!
//! A round ends when every hand is empty. Collected cards cost points, except
//! potions of a color the player holds a strict majority of. Highest total
//! after the last round wins.
//!
//! Supports 3-6 players in the classic (whole deck dealt) and draw (five-card
//! hands refilled from a draw pile, single round) variants.

pub mod deal;
mod game;
pub mod scoring;

pub use game::{PoisonGame, PoisonGameBuilder, StepResult};
