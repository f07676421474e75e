//! Card model: potions of three colors and colorless poison.

use serde::{Deserialize, Serialize};

/// Potion values that exist in the deck, in encoding order.
pub const POTION_VALUES: [u8; 5] = [1, 2, 4, 5, 7];

/// Value carried by every poison card.
pub const POISON_VALUE: u8 = 4;

/// Highest value any card carries.
pub const MAX_CARD_VALUE: u8 = 7;

/// Number of potion colors.
pub const NUM_COLORS: usize = 3;

/// Number of distinct card types: every (color, value) potion plus poison.
pub const NUM_CARD_TYPES: usize = NUM_COLORS * POTION_VALUES.len() + 1;

/// Card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Potion,
    Poison,
}

/// Card or cauldron color.
///
/// The discriminants are part of the observation encoding and must not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    /// Poison cards, and cauldrons that have not committed yet.
    #[default]
    None = 0,
    Red = 1,
    Blue = 2,
    Purple = 3,
}

impl Color {
    /// The three potion colors, in encoding order.
    pub const POTIONS: [Color; NUM_COLORS] = [Color::Red, Color::Blue, Color::Purple];

    /// Raw discriminant.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Dense index of a potion color (Red 0, Blue 1, Purple 2).
    ///
    /// `None` for the colorless value.
    #[must_use]
    pub const fn potion_index(self) -> Option<usize> {
        match self {
            Color::None => None,
            Color::Red => Some(0),
            Color::Blue => Some(1),
            Color::Purple => Some(2),
        }
    }

    /// One-letter tag used by [`Card`]'s `Display`.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Color::None => '_',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Purple => 'P',
        }
    }
}

/// A single card. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub color: Color,
    pub value: u8,
}

impl Card {
    /// A potion of the given color.
    #[must_use]
    pub const fn potion(color: Color, value: u8) -> Self {
        Self {
            kind: CardKind::Potion,
            color,
            value,
        }
    }

    /// A poison card. Always colorless.
    #[must_use]
    pub const fn poison() -> Self {
        Self {
            kind: CardKind::Poison,
            color: Color::None,
            value: POISON_VALUE,
        }
    }

    #[must_use]
    pub const fn is_poison(&self) -> bool {
        matches!(self.kind, CardKind::Poison)
    }

    #[must_use]
    pub const fn is_potion(&self) -> bool {
        matches!(self.kind, CardKind::Potion)
    }

    /// Dense card-type index in `0..NUM_CARD_TYPES`.
    ///
    /// Potions map to `color_index * 5 + value_index`, poison to the last
    /// slot. A potion with a value outside [`POTION_VALUES`] or without a
    /// color maps to 0.
    #[must_use]
    pub fn type_index(&self) -> usize {
        if self.is_poison() {
            return NUM_CARD_TYPES - 1;
        }

        let value_index = POTION_VALUES.iter().position(|&v| v == self.value);
        match (self.color.potion_index(), value_index) {
            (Some(color), Some(value)) => color * POTION_VALUES.len() + value,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Poison => write!(f, "X{}", self.value),
            CardKind::Potion => write!(f, "{}{}", self.color.tag(), self.value),
        }
    }
}

/// Count cards by type index.
#[must_use]
pub fn count_types<'a>(cards: impl IntoIterator<Item = &'a Card>) -> [u8; NUM_CARD_TYPES] {
    let mut counts = [0u8; NUM_CARD_TYPES];
    for card in cards {
        counts[card.type_index()] += 1;
    }
    counts
}
