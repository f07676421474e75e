use thiserror::Error;

/// Everything the engine can refuse to do.
///
/// None of these are fatal: state is left untouched and the caller decides
/// whether to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid player count: {count} (expected 3 to 6)")]
    InvalidPlayerCount { count: usize },
    #[error("Unknown game variant: {0:?}")]
    UnknownVariant(String),
    #[error("Illegal action: card {card_index} into cauldron {cauldron_index}")]
    IllegalAction { card_index: usize, cauldron_index: usize },
    #[error("Card pile is full (capacity {capacity})")]
    PileFull { capacity: usize },
    #[error("Invalid game state: {reason}")]
    InvalidState { reason: &'static str },
}
