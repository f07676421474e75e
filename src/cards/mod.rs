//! Card system: the card model and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Potion (colored) or poison (colorless), with a value
//! - `Color`: Red, Blue, Purple, or `None`
//! - `Deck`: Shuffled cards plus a deal cursor
//!
//! ## Deck Composition
//!
//! 50 cards: per color three each of 1, 2, 5, 7 and two 4s, plus 8 poison
//! cards worth 4.

pub mod card;
pub mod deck;

pub use card::{
    count_types, Card, CardKind, Color, MAX_CARD_VALUE, NUM_CARD_TYPES, NUM_COLORS, POISON_VALUE,
    POTION_VALUES,
};
pub use deck::{build_deck, shuffle, trim_for_player_count, Deck, NUM_POISON_CARDS};
