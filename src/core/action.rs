//! Action representation: which hand card goes into which cauldron.
//!
//! Agents address actions through a flat id space:
//!
//! ```text
//! action_id = card_index * NUM_CAULDRONS + cauldron_index
//! ```
//!
//! `card_index` ranges over the largest possible hand, so the id space has a
//! fixed size of [`ACTION_SPACE_SIZE`] regardless of the current hand. This
//! encoding is what RL trainers depend on; it must stay stable.

use serde::{Deserialize, Serialize};

use super::config::{MAX_PILE_SIZE, NUM_CAULDRONS};
use super::player::PlayerId;

/// Size of the discrete action space.
pub const ACTION_SPACE_SIZE: usize = MAX_PILE_SIZE * NUM_CAULDRONS;

/// Play the hand card at `card_index` into the cauldron at `cauldron_index`.
///
/// ## Example
///
/// ```
/// use poison_engine::core::Action;
///
/// let action = Action::new(4, 2);
/// assert_eq!(action.id(), 14);
/// assert_eq!(Action::from_id(14), Some(action));
/// assert_eq!(Action::from_id(150), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Index into the acting player's hand.
    pub card_index: u8,

    /// Target cauldron.
    pub cauldron_index: u8,
}

impl Action {
    /// Create an action. Range checks happen at legality time.
    #[must_use]
    pub const fn new(card_index: u8, cauldron_index: u8) -> Self {
        Self {
            card_index,
            cauldron_index,
        }
    }

    /// Flat id of this action.
    #[must_use]
    pub const fn id(self) -> u16 {
        self.card_index as u16 * NUM_CAULDRONS as u16 + self.cauldron_index as u16
    }

    /// Decode a flat id. `None` outside the action space.
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        if id as usize >= ACTION_SPACE_SIZE {
            return None;
        }
        Some(Self {
            card_index: (id / NUM_CAULDRONS as u16) as u8,
            cauldron_index: (id % NUM_CAULDRONS as u16) as u8,
        })
    }

    /// Every action in the space, in id order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..ACTION_SPACE_SIZE as u16).filter_map(Action::from_id)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Training data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u8,

    /// Cards the player had to collect because of an overflow.
    pub collected: u8,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u8, collected: u8) -> Self {
        Self {
            player,
            action,
            round,
            collected,
        }
    }
}
