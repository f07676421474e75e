//! Deck construction, shuffling, trimming, and the deal cursor.
//!
//! The deck is rebuilt from scratch every round: canonical order, one
//! Fisher-Yates pass with the game RNG, then the 3-player trim. Shuffling is
//! the only source of randomness.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, POISON_VALUE};
use crate::core::config::DECK_SIZE;
use crate::core::GameRng;

/// Potion values with three copies per color. Value 4 gets two.
const TRIPLE_VALUES: [u8; 4] = [1, 2, 5, 7];

/// Copies of value 4 per color.
const FOURS_PER_COLOR: usize = 2;

/// Number of poison cards.
pub const NUM_POISON_CARDS: usize = 8;

/// Color order used while building the canonical deck.
const BUILD_COLORS: [Color; 3] = [Color::Blue, Color::Red, Color::Purple];

/// Build the 50-card deck in canonical order.
///
/// Colors outer, values inner, poison last. The order carries no meaning
/// beyond being fixed.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in BUILD_COLORS {
        for value in TRIPLE_VALUES {
            deck.extend(std::iter::repeat(Card::potion(color, value)).take(3));
        }
        deck.extend(std::iter::repeat(Card::potion(color, 4)).take(FOURS_PER_COLOR));
    }

    deck.extend(std::iter::repeat(Card::poison()).take(NUM_POISON_CARDS));
    debug_assert_eq!(deck.len(), DECK_SIZE);
    debug_assert!(deck.iter().filter(|c| c.is_poison()).all(|c| c.value == POISON_VALUE));

    deck
}

/// Shuffle a deck in place with the game RNG.
pub fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(deck);
}

/// Drop every 4th card (positions 3, 7, 11, ...) for a 3-player table.
///
/// Kept cards stay in their relative order. Other player counts get the deck
/// back untouched.
#[must_use]
pub fn trim_for_player_count(deck: Vec<Card>, player_count: usize) -> Vec<Card> {
    if player_count != 3 {
        return deck;
    }

    deck.into_iter()
        .enumerate()
        .filter(|(i, _)| i % 4 != 3)
        .map(|(_, card)| card)
        .collect()
}

/// A shuffled deck plus the position of the next card to deal.
///
/// Cards at or after the cursor form the draw pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Wrap an ordered card list with the cursor at the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Build, shuffle, and trim a fresh deck for `player_count` seats.
    #[must_use]
    pub fn prepared(rng: &mut GameRng, player_count: usize) -> Self {
        let mut cards = build_deck();
        shuffle(&mut cards, rng);
        Self::from_cards(trim_for_player_count(cards, player_count))
    }

    /// Take the next card, advancing the cursor.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(card)
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Total cards in this deck, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// All cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
