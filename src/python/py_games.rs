//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{GameState, PlayerId, Variant};
use crate::games::poison::{PoisonGame, PoisonGameBuilder, StepResult};
use crate::nn::{ObservationMode, PoisonEncoder, StateEncoder};
use crate::rules::RulesEngine;

/// Python view of one environment step.
#[pyclass(name = "StepResult", get_all)]
#[derive(Clone, Debug)]
pub struct PyStepResult {
    reward: f32,
    action_legal: bool,
    round_done: bool,
    done: bool,
    winner: Option<u8>,
}

impl From<StepResult> for PyStepResult {
    fn from(result: StepResult) -> Self {
        Self {
            reward: result.reward,
            action_legal: result.action_legal,
            round_done: result.round_done,
            done: result.done,
            winner: result.winner.map(|p| p.0),
        }
    }
}

#[pymethods]
impl PyStepResult {
    fn __repr__(&self) -> String {
        format!(
            "StepResult(reward={}, action_legal={}, round_done={}, done={}, winner={:?})",
            self.reward, self.action_legal, self.round_done, self.done, self.winner
        )
    }
}

/// Python wrapper for a Poison game and its state.
#[pyclass(name = "PoisonGame")]
pub struct PyPoisonGame {
    rules: PoisonGame,
    state: GameState,
}

#[pymethods]
impl PyPoisonGame {
    /// Create and deal a new game.
    ///
    /// # Arguments
    /// - player_count: Number of players (3-6)
    /// - variant: "classic" or "draw"
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (player_count = 3, variant = "classic", seed = 42))]
    fn new(player_count: usize, variant: &str, seed: u32) -> PyResult<Self> {
        let variant: Variant = variant.parse()?;
        let (rules, state) = PoisonGameBuilder::new()
            .player_count(player_count)
            .variant(variant)
            .build(seed)?;
        Ok(Self { rules, state })
    }

    /// Take one step with a flat action id.
    fn step(&mut self, action_id: u16) -> PyResult<PyStepResult> {
        Ok(self.rules.step(&mut self.state, action_id)?.into())
    }

    /// Boolean mask over all action ids for the current player.
    fn legal_action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_vec_bound(py, self.rules.legal_action_mask(&self.state))
    }

    /// Legal action ids for the current player, ascending.
    fn legal_actions(&self) -> Vec<u16> {
        self.rules
            .legal_actions(&self.state)
            .into_iter()
            .map(|a| a.id())
            .collect()
    }

    /// Encoded observation from `perspective`'s seat.
    #[pyo3(signature = (perspective, partial = false))]
    fn observation<'py>(
        &self,
        py: Python<'py>,
        perspective: u8,
        partial: bool,
    ) -> Bound<'py, PyArray1<f32>> {
        let mode = if partial {
            ObservationMode::Partial
        } else {
            ObservationMode::Full
        };
        let encoded = PoisonEncoder::new(mode).encode(&self.state, PlayerId::new(perspective));
        PyArray1::from_vec_bound(py, encoded.into_vec())
    }

    /// Deal the next round, or end the game after the last one.
    fn start_new_round(&mut self) -> PyResult<()> {
        self.rules.start_new_round(&mut self.state).map_err(PyErr::from)
    }

    /// Restart the game from round 1 with zeroed scores.
    fn reset(&mut self) -> PyResult<()> {
        self.rules.reset(&mut self.state).map_err(PyErr::from)
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.state.player_count()
    }

    #[getter]
    fn variant(&self) -> String {
        self.state.variant().to_string()
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.state.current_player().0
    }

    #[getter]
    fn dealer(&self) -> u8 {
        self.state.dealer().0
    }

    #[getter]
    fn round(&self) -> u8 {
        self.state.round()
    }

    #[getter]
    fn max_rounds(&self) -> u8 {
        self.state.max_rounds()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[getter]
    fn round_scored(&self) -> bool {
        self.state.is_round_scored()
    }

    #[getter]
    fn deck_remaining(&self) -> usize {
        self.state.deck_remaining()
    }

    /// Winner of a finished game, None while running or on a tie.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.rules.winner(&self.state).map(|p| p.0)
    }

    /// Cumulative scores by seat.
    #[getter]
    fn scores(&self) -> Vec<i32> {
        self.state.players().values().map(|p| p.score).collect()
    }

    /// A player's hand as card tags ("R5", "X4", ...).
    fn hand(&self, player: u8) -> Option<Vec<String>> {
        self.state
            .hand(PlayerId::new(player))
            .map(|cards| cards.iter().map(ToString::to_string).collect())
    }

    /// A player's collected cards as card tags.
    fn collected(&self, player: u8) -> Option<Vec<String>> {
        self.state
            .collected(PlayerId::new(player))
            .map(|cards| cards.iter().map(ToString::to_string).collect())
    }

    /// A cauldron as (total, color, card tags). Color 0 means uncommitted.
    fn cauldron(&self, index: usize) -> Option<(u8, u8, Vec<String>)> {
        self.state.cauldron(index).map(|c| {
            (
                c.total_value(),
                c.color().raw(),
                c.cards().iter().map(ToString::to_string).collect(),
            )
        })
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_game_over() {
            "over"
        } else {
            "ongoing"
        };
        format!(
            "PoisonGame(players={}, round={}/{}, current=P{}, status={})",
            self.state.player_count(),
            self.state.round(),
            self.state.max_rounds(),
            self.state.current_player().0,
            status
        )
    }
}
