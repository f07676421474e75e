//! Bounded, ordered card pile used for hands and collected piles.

use serde::{Deserialize, Serialize};

use crate::cards::{count_types, Card, NUM_CARD_TYPES};
use crate::core::config::MAX_PILE_SIZE;
use crate::core::error::GameError;

/// Ordered card sequence with a hard capacity of [`MAX_PILE_SIZE`].
///
/// Removal is by index and keeps the remaining cards in order. Growing past
/// capacity is reported as [`GameError::PileFull`] instead of panicking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPile {
    cards: Vec<Card>,
}

impl CardPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    pub fn push(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= MAX_PILE_SIZE {
            return Err(GameError::PileFull {
                capacity: MAX_PILE_SIZE,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Append several cards. Nothing is added if they would not all fit.
    pub fn extend_from_slice(&mut self, cards: &[Card]) -> Result<(), GameError> {
        if self.cards.len() + cards.len() > MAX_PILE_SIZE {
            return Err(GameError::PileFull {
                capacity: MAX_PILE_SIZE,
            });
        }
        self.cards.extend_from_slice(cards);
        Ok(())
    }

    /// Could `count` more cards be added without exceeding capacity?
    #[must_use]
    pub fn has_room(&self, count: usize) -> bool {
        self.cards.len() + count <= MAX_PILE_SIZE
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether another card would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_PILE_SIZE
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Count of each card type in the pile.
    #[must_use]
    pub fn type_counts(&self) -> [u8; NUM_CARD_TYPES] {
        count_types(&self.cards)
    }
}

impl<'a> IntoIterator for &'a CardPile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
