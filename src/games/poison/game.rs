//! Poison game implementation.

use crate::cards::Color;
use crate::core::config::MAX_PILE_SIZE;
use crate::core::{
    Action, ActionRecord, GameConfig, GameError, GameState, PlayerId, PlayerMap, Variant,
};
use crate::rules::{ActionOutcome, GameResult, RulesEngine};

use super::{deal, scoring};

/// Result of one id-based environment step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepResult {
    /// Negative count of collected cards, 0 when nothing overflowed.
    pub reward: f32,

    /// Whether the requested action was legal and applied.
    pub action_legal: bool,

    /// Every hand is empty; the round has been scored.
    pub round_done: bool,

    /// The game is over.
    pub done: bool,

    /// Unique top scorer once `done`, `None` on a tie or while running.
    pub winner: Option<PlayerId>,
}

/// Poison rules for one configured table.
///
/// Holds only configuration; all mutable data lives in [`GameState`].
#[derive(Clone, Debug)]
pub struct PoisonGame {
    config: GameConfig,
}

/// Builder for creating a PoisonGame.
pub struct PoisonGameBuilder {
    player_count: usize,
    variant: Variant,
}

impl Default for PoisonGameBuilder {
    fn default() -> Self {
        Self {
            player_count: 3,
            variant: Variant::Classic,
        }
    }
}

impl PoisonGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats (3-6, checked by `build`).
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Build the rules and a dealt initial state.
    ///
    /// Fails without producing any state if the player count is out of range.
    pub fn build(self, seed: u32) -> Result<(PoisonGame, GameState), GameError> {
        let config = GameConfig::new(self.player_count, self.variant)?;
        let game = PoisonGame::new(config);
        let mut state = GameState::new(config, seed);
        game.reset(&mut state)?;
        Ok((game, state))
    }
}

impl PoisonGame {
    /// Rules for an already validated configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Restart the whole game in place.
    ///
    /// Scores go back to zero, seat 0 deals round 1, and the history is
    /// cleared. The RNG is not reseeded; the new deck continues its stream.
    pub fn reset(&self, state: &mut GameState) -> Result<(), GameError> {
        state.clear_table();
        for (_, player) in state.players.iter_mut() {
            player.score = 0;
        }

        state.dealer = PlayerId::new(0);
        state.round = 1;
        state.game_over = false;
        state.round_scored = false;
        state.history.clear();

        self.deal_round(state)
    }

    /// Move on to the next round, or end the game if this was the last one.
    ///
    /// Keeps cumulative scores and rotates the dealer one seat.
    pub fn start_new_round(&self, state: &mut GameState) -> Result<(), GameError> {
        if state.round >= state.max_rounds() {
            state.game_over = true;
            return Ok(());
        }

        state.clear_table();
        state.dealer = state.dealer.next(state.player_count());
        state.round += 1;
        state.game_over = false;
        state.round_scored = false;

        self.deal_round(state)
    }

    /// Score the current round (once) and return the deltas.
    pub fn apply_round_scores(&self, state: &mut GameState) -> PlayerMap<i32> {
        scoring::apply_round_scores(state)
    }

    /// Winner of a finished game. See [`scoring::winner`].
    #[must_use]
    pub fn winner(&self, state: &GameState) -> Option<PlayerId> {
        scoring::winner(state)
    }

    /// Take one environment step with a flat action id.
    ///
    /// - A finished game reports `done` and its winner without changing.
    /// - A current player with an empty hand is skipped.
    /// - An out-of-range or illegal id leaves the state unchanged.
    ///
    /// When the step empties the last hand, the round is scored and, at the
    /// round limit, the game ends. Starting the next round is up to the
    /// caller.
    pub fn step(&self, state: &mut GameState, action_id: u16) -> Result<StepResult, GameError> {
        if state.game_over {
            return Ok(StepResult {
                done: true,
                winner: scoring::winner(state),
                ..StepResult::default()
            });
        }

        let mut result = StepResult::default();

        if state.current_hand().is_empty() {
            log::trace!("{} has no cards, skipping", state.current_player);
            state.advance_turn();
        } else if let Some(action) =
            Action::from_id(action_id).filter(|&a| self.is_action_legal(state, a))
        {
            let outcome = self.apply_action(state, action)?;
            result.action_legal = true;
            result.reward = outcome.reward;
        }

        result.round_done = state.is_round_over();
        if result.round_done {
            scoring::apply_round_scores(state);
            if state.round >= state.max_rounds() {
                state.game_over = true;
                log::info!(
                    "Game over after round {}: winner {:?}",
                    state.round,
                    scoring::winner(state)
                );
            }
        }

        result.done = state.game_over;
        if result.done {
            result.winner = scoring::winner(state);
        }

        Ok(result)
    }

    /// Prepare a fresh deck, deal it, and hand the turn left of the dealer.
    fn deal_round(&self, state: &mut GameState) -> Result<(), GameError> {
        deal::prepare_deck(state);
        deal::deal(state)?;
        state.current_player = state.dealer.next(state.player_count());

        log::debug!(
            "Round {}/{} started, dealer {}",
            state.round,
            state.max_rounds(),
            state.dealer
        );
        Ok(())
    }
}

impl RulesEngine for PoisonGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn is_action_legal(&self, state: &GameState, action: Action) -> bool {
        let Some(card) = state.current_hand().get(action.card_index as usize) else {
            return false;
        };
        let Some(cauldron) = state.cauldron(action.cauldron_index as usize) else {
            return false;
        };

        if card.is_poison() {
            return true;
        }

        // One cauldron per color across the table
        if cauldron.color() == Color::None {
            return !state.cauldrons().iter().any(|c| c.color() == card.color);
        }

        cauldron.color() == card.color
    }

    fn apply_action(&self, state: &mut GameState, action: Action) -> Result<ActionOutcome, GameError> {
        let illegal = GameError::IllegalAction {
            card_index: action.card_index as usize,
            cauldron_index: action.cauldron_index as usize,
        };
        if !self.is_action_legal(state, action) {
            return Err(illegal);
        }

        let actor = state.current_player;
        let card_index = action.card_index as usize;
        let cauldron_index = action.cauldron_index as usize;

        // Nothing is mutated until the collected pile is known to have room
        let card = state.players[actor]
            .hand
            .get(card_index)
            .ok_or_else(|| illegal.clone())?;
        let target = &state.cauldrons[cauldron_index];
        if target.would_overflow(card) && !state.players[actor].collected.has_room(target.len()) {
            return Err(GameError::PileFull {
                capacity: MAX_PILE_SIZE,
            });
        }

        let player = &mut state.players[actor];
        player.hand.remove(card_index).ok_or(illegal)?;

        let cauldron = &mut state.cauldrons[cauldron_index];
        let collected = match cauldron.add(card) {
            Some(overflow) => {
                log::debug!(
                    "{} overflowed cauldron {} with {}, collecting {} cards",
                    actor,
                    cauldron_index,
                    card,
                    overflow.len()
                );
                player.collected.extend_from_slice(&overflow.collected)?;
                overflow.len()
            }
            None => 0,
        };

        if state.variant() == Variant::Draw && !state.players[actor].hand.is_full() {
            if let Some(drawn) = state.deck.draw() {
                state.players[actor].hand.push(drawn)?;
            }
        }

        state.advance_turn();

        log::trace!("{} played {} into cauldron {}", actor, card, cauldron_index);
        state.history.push_back(ActionRecord::new(
            actor,
            action,
            state.round,
            collected as u8,
        ));

        Ok(ActionOutcome {
            reward: -(collected as f32),
            collected,
        })
    }

    fn is_round_over(&self, state: &GameState) -> bool {
        state.is_round_over()
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_game_over() {
            return None;
        }

        Some(match scoring::winner(state) {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }
}
