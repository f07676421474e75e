//! Game configuration and rule constants.
//!
//! A game is configured by a player count and a [`Variant`]. Both are
//! validated once, up front, by [`GameConfig::new`]; everything downstream
//! can assume a legal table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Fewest seats at a table.
pub const MIN_PLAYERS: usize = 3;

/// Most seats at a table. Observations always reserve this many seat blocks.
pub const MAX_PLAYERS: usize = 6;

/// Number of shared cauldrons.
pub const NUM_CAULDRONS: usize = 3;

/// A cauldron overflows when its total goes strictly above this.
pub const CAULDRON_THRESHOLD: u8 = 13;

/// Cards in an untrimmed deck.
pub const DECK_SIZE: usize = 50;

/// Capacity of any single pile (hand or collected). No pile can outgrow the deck.
pub const MAX_PILE_SIZE: usize = DECK_SIZE;

/// Opening hand size in the draw variant.
pub const DRAW_HAND_SIZE: usize = 5;

/// Game flow variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Variant {
    /// Whole deck dealt out; several rounds.
    #[default]
    Classic = 0,
    /// Five-card hands refilled from a draw pile; a single round.
    Draw = 1,
}

impl Variant {
    /// Number of rounds before the game ends.
    ///
    /// Classic plays one round per seat, except that 3-player tables play
    /// twice around. Draw is a single round.
    #[must_use]
    pub const fn max_rounds(self, player_count: usize) -> u8 {
        match self {
            Variant::Draw => 1,
            Variant::Classic if player_count == 3 => (player_count * 2) as u8,
            Variant::Classic => player_count as u8,
        }
    }

    /// Raw discriminant, as used in observations.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "draw" => Ok(Variant::Draw),
            _ => Err(GameError::UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Classic => write!(f, "classic"),
            Variant::Draw => write!(f, "draw"),
        }
    }
}

/// Validated table configuration.
///
/// Deserialization goes through [`GameConfig::new`], so a loaded config is
/// as trustworthy as a built one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    player_count: usize,
    variant: Variant,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    player_count: usize,
    variant: Variant,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.player_count, raw.variant)
    }
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// Fails with [`GameError::InvalidPlayerCount`] outside
    /// `MIN_PLAYERS..=MAX_PLAYERS`.
    pub fn new(player_count: usize, variant: Variant) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
            });
        }
        Ok(Self {
            player_count,
            variant,
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Round limit for this table.
    #[must_use]
    pub fn max_rounds(&self) -> u8 {
        self.variant.max_rounds(self.player_count)
    }
}
