//! Deck preparation and dealing.

use crate::cards::Deck;
use crate::core::config::{Variant, DRAW_HAND_SIZE};
use crate::core::error::GameError;
use crate::core::state::GameState;

/// Replace the state's deck with a freshly built, shuffled, trimmed one.
///
/// Consumes draws from the state's RNG, continuing its stream.
pub fn prepare_deck(state: &mut GameState) {
    let player_count = state.player_count();
    state.deck = Deck::prepared(&mut state.rng, player_count);
}

/// Deal round-robin from the deck cursor, starting left of the dealer.
///
/// Classic deals the whole deck. The draw variant deals five cards per seat
/// and leaves the rest as the draw pile. Returns the number of cards dealt.
pub fn deal(state: &mut GameState) -> Result<usize, GameError> {
    let player_count = state.player_count();
    let quota = match state.variant() {
        Variant::Classic => state.deck.remaining(),
        Variant::Draw => DRAW_HAND_SIZE * player_count,
    };

    let mut seat = state.dealer.next(player_count);
    let mut dealt = 0;
    while dealt < quota {
        let Some(card) = state.deck.draw() else {
            break;
        };
        state.players[seat].hand.push(card)?;
        seat = seat.next(player_count);
        dealt += 1;
    }

    log::debug!(
        "Dealt {} cards from dealer {} ({} left in draw pile)",
        dealt,
        state.dealer,
        state.deck.remaining()
    );
    Ok(dealt)
}
