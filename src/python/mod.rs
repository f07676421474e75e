//! Python bindings for the Poison engine.
//!
//! This module provides PyO3 bindings for driving games from RL trainers.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import poison_engine as pe
//!
//! game = pe.PoisonGame(player_count=4, variant="classic", seed=42)
//!
//! while not game.game_over:
//!     mask = game.legal_action_mask()
//!     obs = game.observation(game.current_player, partial=True)
//!     result = game.step(int(np.flatnonzero(mask)[0]) if mask.any() else 0)
//!     if result.round_done and not result.done:
//!         game.start_new_round()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// poison_engine: Poison card game rules for reinforcement learning.
///
/// This module provides:
/// - The `PoisonGame` environment (step by action id, masks, observations)
/// - `Action` for encoding and decoding action ids
#[pymodule]
fn poison_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyStepResult>()?;
    m.add_class::<PyPoisonGame>()?;

    m.add("ACTION_SPACE_SIZE", crate::core::ACTION_SPACE_SIZE)?;
    m.add("OBSERVATION_SIZE", crate::nn::OBSERVATION_SIZE)?;

    Ok(())
}
