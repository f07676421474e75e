//! Round scoring and winner determination.
//!
//! At the end of a round every collected card costs points: poison 2,
//! potions 1. For each color, the one player holding strictly more potions of
//! that color than anyone else is immune and pays nothing for them. A tie
//! for the most (including everyone at zero) grants no immunity.

use crate::cards::{Color, NUM_COLORS};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::GameState;

/// Points lost per collected poison card.
pub const POISON_PENALTY: i32 = 2;

/// Points lost per collected non-immune potion.
pub const POTION_PENALTY: i32 = 1;

/// Immune player per potion color, indexed by `Color::potion_index`.
#[must_use]
pub fn immunities(state: &GameState) -> [Option<PlayerId>; NUM_COLORS] {
    let mut immune = [None; NUM_COLORS];

    for (slot, color) in immune.iter_mut().zip(Color::POTIONS) {
        let counts: Vec<(PlayerId, usize)> = state
            .players()
            .iter()
            .map(|(id, p)| {
                let count = p
                    .collected
                    .iter()
                    .filter(|c| c.is_potion() && c.color == color)
                    .count();
                (id, count)
            })
            .collect();

        let max = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
        if max == 0 {
            continue;
        }

        let mut leaders = counts.iter().filter(|&&(_, n)| n == max);
        if let (Some(&(leader, _)), None) = (leaders.next(), leaders.next()) {
            *slot = Some(leader);
        }
    }

    immune
}

/// Score deltas for the current round, without applying them.
#[must_use]
pub fn round_scores(state: &GameState) -> PlayerMap<i32> {
    let immune = immunities(state);

    PlayerMap::new(state.player_count(), |player| {
        state.players()[player]
            .collected
            .iter()
            .map(|card| {
                if card.is_poison() {
                    -POISON_PENALTY
                } else if card
                    .color
                    .potion_index()
                    .is_some_and(|i| immune[i] == Some(player))
                {
                    0
                } else {
                    -POTION_PENALTY
                }
            })
            .sum()
    })
}

/// Add this round's deltas to the cumulative scores, once per round.
///
/// Returns the deltas either way; a second call before the next round starts
/// leaves the scores alone.
pub fn apply_round_scores(state: &mut GameState) -> PlayerMap<i32> {
    let deltas = round_scores(state);

    if !state.round_scored {
        for (player, delta) in deltas.iter() {
            state.players[player].score += *delta;
        }
        state.round_scored = true;
        log::debug!("Round {} scored: {:?}", state.round, deltas);
    }

    deltas
}

/// Unique top scorer of a finished game.
///
/// `None` while the game is still running and whenever two or more players
/// share the best score.
#[must_use]
pub fn winner(state: &GameState) -> Option<PlayerId> {
    if !state.is_game_over() {
        return None;
    }

    let best = state.players().values().map(|p| p.score).max()?;
    let mut leaders = state.players().iter().filter(|(_, p)| p.score == best);
    match (leaders.next(), leaders.next()) {
        (Some((player, _)), None) => Some(player),
        _ => None,
    }
}
