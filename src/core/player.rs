//! Seats, per-seat storage, and per-player card holdings.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based and wrap around the table.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! One seat's hand, collected pile, and cumulative score.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::zones::CardPile;

/// Seat identifier.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, wrapping around a table of `player_count`.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Offset of this seat counted clockwise from `base`.
    ///
    /// ```
    /// use poison_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).relative_to(PlayerId::new(2), 4), 2);
    /// assert_eq!(PlayerId::new(3).relative_to(PlayerId::new(1), 4), 2);
    /// ```
    #[must_use]
    pub const fn relative_to(self, base: PlayerId, player_count: usize) -> usize {
        (self.0 as usize + player_count - base.0 as usize) % player_count
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use poison_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use poison_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::with_value(4, 0);
/// scores[PlayerId::new(1)] -= 3;
///
/// assert_eq!(scores[PlayerId::new(1)], -3);
/// assert_eq!(scores.try_get(PlayerId::new(7)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    ///
    /// Panics on a seat outside the table; use [`PlayerMap::try_get`] for
    /// caller-supplied seats.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Checked lookup: `None` if the seat is not at this table.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat's cards and cumulative score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Cards held, in deal order. Played by index.
    pub hand: CardPile,

    /// Cards taken from overflowing cauldrons this round.
    pub collected: CardPile,

    /// Cumulative score. Only changes when a round is scored.
    pub score: i32,
}

impl Player {
    /// Empty hand and pile, score 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear hand and collected pile, keeping the score.
    pub fn clear_cards(&mut self) {
        self.hand.clear();
        self.collected.clear();
    }
}
