//! Shared cauldrons and overflow resolution.
//!
//! A cauldron accumulates cards and a running total. The first potion played
//! into an empty cauldron commits its color. When the total passes
//! [`CAULDRON_THRESHOLD`], everything except the card that caused the
//! overflow is handed back to the caller and the cauldron restarts from that
//! card alone.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{count_types, Card, Color, NUM_CARD_TYPES};
use crate::core::config::CAULDRON_THRESHOLD;

/// Inline storage for cauldron contents.
///
/// A cauldron rarely holds more than a handful of cards before it overflows.
pub type CauldronCards = SmallVec<[Card; 8]>;

/// Cards removed from a cauldron by an overflow, oldest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overflow {
    pub collected: CauldronCards,
}

impl Overflow {
    /// Number of cards collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }
}

/// One of the shared pots.
///
/// `total_value` always equals the sum of `cards`; the color only changes on
/// first commit, overflow, or clear.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cauldron {
    cards: CauldronCards,
    total_value: u8,
    color: Color,
}

impl Cauldron {
    /// Create an empty, uncommitted cauldron.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in play order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn total_value(&self) -> u8 {
        self.total_value
    }

    /// Committed color, `Color::None` until a potion lands here.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Count of each card type in the cauldron.
    #[must_use]
    pub fn type_counts(&self) -> [u8; NUM_CARD_TYPES] {
        count_types(&self.cards)
    }

    /// Would adding `card` push the total past the threshold?
    #[must_use]
    pub fn would_overflow(&self, card: Card) -> bool {
        u16::from(self.total_value) + u16::from(card.value) > u16::from(CAULDRON_THRESHOLD)
    }

    /// Add a card and resolve overflow.
    ///
    /// Returns the collected cards if the new total exceeds the threshold.
    /// Legality (color matching) is the caller's job.
    pub fn add(&mut self, card: Card) -> Option<Overflow> {
        self.cards.push(card);
        self.total_value += card.value;

        if self.color == Color::None && card.is_potion() {
            self.color = card.color;
        }

        if self.total_value <= CAULDRON_THRESHOLD {
            return None;
        }

        let keep_from = self.cards.len() - 1;
        let collected: CauldronCards = self.cards.drain(..keep_from).collect();

        self.total_value = card.value;
        // Poison is colorless, so this also uncommits after a poison overflow.
        self.color = card.color;

        Some(Overflow { collected })
    }

    /// Empty the cauldron and drop its color.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total_value = 0;
        self.color = Color::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue(value: u8) -> Card {
        Card::potion(Color::Blue, value)
    }

    #[test]
    fn test_first_potion_commits_color() {
        let mut cauldron = Cauldron::new();
        assert_eq!(cauldron.color(), Color::None);

        assert!(cauldron.add(Card::poison()).is_none());
        assert_eq!(cauldron.color(), Color::None);

        assert!(cauldron.add(blue(2)).is_none());
        assert_eq!(cauldron.color(), Color::Blue);
        assert_eq!(cauldron.total_value(), 6);
        assert_eq!(cauldron.len(), 2);
    }

    #[test]
    fn test_threshold_is_not_overflow() {
        let mut cauldron = Cauldron::new();
        cauldron.add(blue(7));
        cauldron.add(blue(5));
        assert!(cauldron.add(blue(1)).is_none());
        assert_eq!(cauldron.total_value(), 13);
    }

    #[test]
    fn test_overflow_collects_all_but_trigger() {
        let mut cauldron = Cauldron::new();
        cauldron.add(blue(5));
        cauldron.add(blue(5));
        assert_eq!(cauldron.total_value(), 10);

        let overflow = cauldron.add(blue(5)).expect("15 > 13 overflows");

        assert_eq!(overflow.collected.as_slice(), &[blue(5), blue(5)]);
        assert_eq!(overflow.len(), 2);
        assert_eq!(cauldron.cards(), &[blue(5)]);
        assert_eq!(cauldron.total_value(), 5);
        assert_eq!(cauldron.color(), Color::Blue);
    }

    #[test]
    fn test_poison_overflow_uncommits() {
        let mut cauldron = Cauldron::new();
        cauldron.add(blue(7));
        cauldron.add(blue(5));

        let overflow = cauldron.add(Card::poison()).expect("16 > 13 overflows");

        assert_eq!(overflow.len(), 2);
        assert_eq!(cauldron.cards(), &[Card::poison()]);
        assert_eq!(cauldron.total_value(), 4);
        assert_eq!(cauldron.color(), Color::None);
    }

    #[test]
    fn test_would_overflow() {
        let mut cauldron = Cauldron::new();
        cauldron.add(blue(7));
        cauldron.add(blue(4));

        assert!(!cauldron.would_overflow(blue(2)));
        assert!(cauldron.would_overflow(blue(5)));
        assert!(cauldron.would_overflow(Card::poison()));
    }

    #[test]
    fn test_clear() {
        let mut cauldron = Cauldron::new();
        cauldron.add(blue(4));
        cauldron.clear();

        assert!(cauldron.is_empty());
        assert_eq!(cauldron.total_value(), 0);
        assert_eq!(cauldron.color(), Color::None);
    }
}
