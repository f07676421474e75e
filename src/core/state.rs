//! Authoritative game state.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - Configuration (player count, variant)
//! - Per-seat hands, collected piles, and scores
//! - The three cauldrons
//! - Turn, dealer, and round pointers plus the game-over / scored flags
//! - The shuffled deck and its deal cursor
//! - RNG state and the action history
//!
//! The state is a passive aggregate. Rules live in
//! [`PoisonGame`](crate::games::poison::PoisonGame), which mutates it through
//! `&mut GameState`; readers get checked accessors that return `None` for
//! seats or indices that do not exist.
//!
//! Deserialized states are checked for internal consistency (seat counts,
//! seat pointers, pile capacities, cauldron totals) before they are accepted.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::{GameConfig, Variant, CAULDRON_THRESHOLD, DECK_SIZE, MAX_PILE_SIZE, NUM_CAULDRONS};
use super::error::GameError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Deck, MAX_CARD_VALUE};
use crate::zones::Cauldron;

/// Full game state.
///
/// Cloning is cheap enough for rollouts: the history is a persistent
/// `im::Vector` and everything else is small and bounded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) config: GameConfig,

    pub(crate) players: PlayerMap<Player>,

    pub(crate) cauldrons: [Cauldron; NUM_CAULDRONS],

    /// Seat to act next.
    pub(crate) current_player: PlayerId,

    pub(crate) dealer: PlayerId,

    /// Round number (starts at 1).
    pub(crate) round: u8,

    pub(crate) game_over: bool,

    /// Set once the current round's scores have been added.
    pub(crate) round_scored: bool,

    pub(crate) deck: Deck,

    /// Deterministic RNG.
    pub(crate) rng: GameRng,

    /// Actions applied since the last reset.
    pub(crate) history: Vector<ActionRecord>,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    config: GameConfig,
    players: PlayerMap<Player>,
    cauldrons: [Cauldron; NUM_CAULDRONS],
    current_player: PlayerId,
    dealer: PlayerId,
    round: u8,
    game_over: bool,
    round_scored: bool,
    deck: Deck,
    rng: GameRng,
    history: Vector<ActionRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let invalid = |reason| Err(GameError::InvalidState { reason });
        let n = raw.config.player_count();

        if raw.players.player_count() != n {
            return invalid("seat count does not match player count");
        }
        if raw.current_player.index() >= n || raw.dealer.index() >= n {
            return invalid("seat pointer out of range");
        }
        if raw.deck.len() > DECK_SIZE {
            return invalid("deck too large");
        }
        if raw
            .players
            .values()
            .any(|p| p.hand.len() > MAX_PILE_SIZE || p.collected.len() > MAX_PILE_SIZE)
        {
            return invalid("pile over capacity");
        }
        let too_high = |cards: &[Card]| cards.iter().any(|c| c.value > MAX_CARD_VALUE);
        if too_high(raw.deck.cards())
            || raw.cauldrons.iter().any(|c| too_high(c.cards()))
            || raw
                .players
                .values()
                .any(|p| too_high(p.hand.as_slice()) || too_high(p.collected.as_slice()))
        {
            return invalid("card value out of range");
        }
        for cauldron in &raw.cauldrons {
            let sum: u32 = cauldron.cards().iter().map(|c| u32::from(c.value)).sum();
            if sum != u32::from(cauldron.total_value()) {
                return invalid("cauldron total does not match its cards");
            }
            if cauldron.total_value() > CAULDRON_THRESHOLD && cauldron.len() > 1 {
                return invalid("cauldron over threshold");
            }
        }

        Ok(Self {
            config: raw.config,
            players: raw.players,
            cauldrons: raw.cauldrons,
            current_player: raw.current_player,
            dealer: raw.dealer,
            round: raw.round,
            game_over: raw.game_over,
            round_scored: raw.round_scored,
            deck: raw.deck,
            rng: raw.rng,
            history: raw.history,
        })
    }
}

impl GameState {
    /// Create an empty table: no cards dealt, round 1, seat 0 deals.
    ///
    /// Use [`PoisonGameBuilder`](crate::games::poison::PoisonGameBuilder) to
    /// get a dealt, playable state.
    #[must_use]
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let player_count = config.player_count();
        Self {
            config,
            players: PlayerMap::with_default(player_count),
            cauldrons: Default::default(),
            current_player: PlayerId::new(0).next(player_count),
            dealer: PlayerId::new(0),
            round: 1,
            game_over: false,
            round_scored: false,
            deck: Deck::default(),
            rng: GameRng::new(seed),
            history: Vector::new(),
        }
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.config.variant()
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    // === Progression ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    #[must_use]
    pub fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub fn max_rounds(&self) -> u8 {
        self.config.max_rounds()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn is_round_scored(&self) -> bool {
        self.round_scored
    }

    /// A round is over once every hand is empty.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.players.values().all(|p| p.hand.is_empty())
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.try_get(player)
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.player(player).map(|p| p.hand.as_slice())
    }

    #[must_use]
    pub fn hand_card(&self, player: PlayerId, index: usize) -> Option<Card> {
        self.player(player)?.hand.get(index)
    }

    #[must_use]
    pub fn collected(&self, player: PlayerId) -> Option<&[Card]> {
        self.player(player).map(|p| p.collected.as_slice())
    }

    #[must_use]
    pub fn collected_card(&self, player: PlayerId, index: usize) -> Option<Card> {
        self.player(player)?.collected.get(index)
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<i32> {
        self.player(player).map(|p| p.score)
    }

    /// The acting seat's hand.
    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        self.players[self.current_player].hand.as_slice()
    }

    // === Table ===

    #[must_use]
    pub fn cauldrons(&self) -> &[Cauldron; NUM_CAULDRONS] {
        &self.cauldrons
    }

    #[must_use]
    pub fn cauldron(&self, index: usize) -> Option<&Cauldron> {
        self.cauldrons.get(index)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Empty every hand, collected pile, and cauldron. Scores are kept.
    pub(crate) fn clear_table(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.clear_cards();
        }
        for cauldron in &mut self.cauldrons {
            cauldron.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn config(players: usize) -> GameConfig {
        GameConfig::new(players, Variant::Classic).unwrap()
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(config(4), 42);

        assert_eq!(state.player_count(), 4);
        assert_eq!(state.round(), 1);
        assert_eq!(state.dealer(), PlayerId::new(0));
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert!(!state.is_game_over());
        assert!(!state.is_round_scored());
        assert!(state.is_round_over());
        assert_eq!(state.deck_remaining(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_out_of_range_queries() {
        let state = GameState::new(config(3), 42);
        let missing = PlayerId::new(3);

        assert!(state.player(missing).is_none());
        assert!(state.hand(missing).is_none());
        assert!(state.collected(missing).is_none());
        assert!(state.score(missing).is_none());
        assert!(state.hand_card(PlayerId::new(0), 0).is_none());
        assert!(state.collected_card(PlayerId::new(0), 0).is_none());
        assert!(state.cauldron(3).is_none());
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = GameState::new(config(3), 1);
        assert_eq!(state.current_player(), PlayerId::new(1));

        state.advance_turn();
        assert_eq!(state.current_player(), PlayerId::new(2));
        state.advance_turn();
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_clear_table_keeps_scores() {
        let mut state = GameState::new(config(3), 1);
        let p0 = PlayerId::new(0);
        state.players[p0].hand.push(Card::poison()).unwrap();
        state.players[p0].collected.push(Card::potion(Color::Red, 1)).unwrap();
        state.players[p0].score = -3;
        state.cauldrons[1].add(Card::potion(Color::Blue, 2));

        state.clear_table();

        assert_eq!(state.hand(p0), Some(&[][..]));
        assert_eq!(state.collected(p0), Some(&[][..]));
        assert_eq!(state.score(p0), Some(-3));
        assert!(state.cauldrons().iter().all(Cauldron::is_empty));
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::new(config(5), 99);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    /// Serialize `state`, let `edit` tamper with the JSON, and load it back.
    fn reload(
        state: &GameState,
        edit: impl FnOnce(&mut serde_json::Value),
    ) -> Result<GameState, serde_json::Error> {
        let mut value = serde_json::to_value(state).unwrap();
        edit(&mut value);
        serde_json::from_value(value)
    }

    #[test]
    fn test_state_deserialize_rejects_bad_config() {
        let state = GameState::new(config(4), 7);
        let err = reload(&state, |v| v["config"]["player_count"] = 0.into()).unwrap_err();
        assert!(err.to_string().contains("Invalid player count"), "{err}");
    }

    #[test]
    fn test_state_deserialize_rejects_seat_mismatch() {
        let state = GameState::new(config(4), 7);
        let err = reload(&state, |v| v["config"]["player_count"] = 6.into()).unwrap_err();
        assert!(err.to_string().contains("seat count"), "{err}");
    }

    #[test]
    fn test_state_deserialize_rejects_bad_seat_pointer() {
        let state = GameState::new(config(3), 7);
        let err = reload(&state, |v| v["current_player"] = 3.into()).unwrap_err();
        assert!(err.to_string().contains("seat pointer"), "{err}");

        let err = reload(&state, |v| v["dealer"] = 9.into()).unwrap_err();
        assert!(err.to_string().contains("seat pointer"), "{err}");
    }

    #[test]
    fn test_state_deserialize_rejects_bad_cauldron_total() {
        let mut state = GameState::new(config(3), 7);
        state.cauldrons[0].add(Card::potion(Color::Red, 5));
        let err = reload(&state, |v| v["cauldrons"][0]["total_value"] = 200.into()).unwrap_err();
        assert!(err.to_string().contains("cauldron total"), "{err}");
    }

    #[test]
    fn test_state_deserialize_rejects_bad_card_value() {
        let mut state = GameState::new(config(3), 7);
        state.players[PlayerId::new(0)].hand.push(Card::poison()).unwrap();
        let err = reload(&state, |v| v["players"]["data"][0]["hand"]["cards"][0]["value"] = 250.into())
            .unwrap_err();
        assert!(err.to_string().contains("card value"), "{err}");
    }

    #[test]
    fn test_state_deserialize_accepts_played_state() {
        let mut state = GameState::new(config(5), 7);
        state.players[PlayerId::new(2)].hand.push(Card::poison()).unwrap();
        state.cauldrons[1].add(Card::potion(Color::Purple, 7));
        assert_eq!(reload(&state, |_| {}).unwrap(), state);
    }
}
