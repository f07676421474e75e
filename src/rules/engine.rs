//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - Win/loss conditions

use crate::core::action::{Action, ACTION_SPACE_SIZE};
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tie at the top score (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// What happened when a legal action was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActionOutcome {
    /// Negative count of cards the actor had to collect, 0 without overflow.
    pub reward: f32,

    /// Number of cards collected by the actor.
    pub collected: usize,
}

impl ActionOutcome {
    /// Did the action overflow its cauldron?
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.collected > 0
    }
}

/// Rules engine trait.
///
/// Games implement this trait to define their rules. Every mutation goes
/// through `&mut GameState`; the engine itself holds only configuration.
///
/// ## Implementation Notes
///
/// - `is_action_legal`: Must be a pure check, never mutate
/// - `apply_action`: Must leave the state untouched on error
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Can the current player take this action?
    fn is_action_legal(&self, state: &GameState, action: Action) -> bool;

    /// Apply an action for the current player.
    fn apply_action(&self, state: &mut GameState, action: Action) -> Result<ActionOutcome, GameError>;

    /// Check if the current round has ended.
    fn is_round_over(&self, state: &GameState) -> bool;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for the current player, in id order.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        Action::all()
            .filter(|&action| self.is_action_legal(state, action))
            .collect()
    }

    /// Legal-action mask over the full action space.
    ///
    /// Entry `i` is true iff the action with id `i` is legal.
    fn legal_action_mask(&self, state: &GameState) -> Vec<bool> {
        let mask: Vec<bool> = Action::all()
            .map(|action| self.is_action_legal(state, action))
            .collect();
        debug_assert_eq!(mask.len(), ACTION_SPACE_SIZE);
        mask
    }

    /// Is the action with this id legal? Out-of-range ids never are.
    fn is_action_id_legal(&self, state: &GameState, action_id: u16) -> bool {
        Action::from_id(action_id).is_some_and(|action| self.is_action_legal(state, action))
    }
}
