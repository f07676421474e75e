//! Flat observation encoding for Poison.
//!
//! ## Layout
//!
//! 273 floats, all raw counts (no normalization):
//!
//! | Offset | Size   | Contents                                           |
//! |--------|--------|----------------------------------------------------|
//! | 0      | 6      | player count, current seat, dealer seat, round, variant, draw pile size |
//! | 6      | 6 x 35 | seat blocks: hand size, collected size, score, hand type counts, collected type counts |
//! | 216    | 3 x 19 | cauldron blocks: total, card count, color, type counts |
//!
//! Seats are rotated so slot 0 is always the perspective player; current and
//! dealer seats are given relative to it. Slots past the player count stay
//! zero.

use crate::cards::NUM_CARD_TYPES;
use crate::core::action::ACTION_SPACE_SIZE;
use crate::core::config::{MAX_PLAYERS, NUM_CAULDRONS};
use crate::core::{GameState, PlayerId};
use crate::nn::traits::{EncodedState, StateEncoder};
use crate::zones::Cauldron;

/// Number of leading global features.
pub const GLOBAL_FEATURES: usize = 6;

/// Features per seat slot.
pub const SEAT_FEATURES: usize = 3 + 2 * NUM_CARD_TYPES;

/// Features per cauldron.
pub const CAULDRON_FEATURES: usize = 3 + NUM_CARD_TYPES;

/// Total observation length.
pub const OBSERVATION_SIZE: usize =
    GLOBAL_FEATURES + MAX_PLAYERS * SEAT_FEATURES + NUM_CAULDRONS * CAULDRON_FEATURES;

/// How much of the table the observer gets to see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObservationMode {
    /// Everything, including opponents' hands.
    #[default]
    Full,
    /// Own hand only; collected piles stay hidden until the round is scored.
    Partial,
}

/// Encoder producing the fixed-size Poison observation.
#[derive(Clone, Debug, Default)]
pub struct PoisonEncoder {
    mode: ObservationMode,
}

impl PoisonEncoder {
    #[must_use]
    pub fn new(mode: ObservationMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn full() -> Self {
        Self::new(ObservationMode::Full)
    }

    #[must_use]
    pub fn partial() -> Self {
        Self::new(ObservationMode::Partial)
    }

    #[must_use]
    pub fn mode(&self) -> ObservationMode {
        self.mode
    }

    /// Offset of seat slot `slot` in the tensor.
    #[must_use]
    pub const fn seat_offset(slot: usize) -> usize {
        GLOBAL_FEATURES + slot * SEAT_FEATURES
    }

    /// Offset of cauldron `index` in the tensor.
    #[must_use]
    pub const fn cauldron_offset(index: usize) -> usize {
        GLOBAL_FEATURES + MAX_PLAYERS * SEAT_FEATURES + index * CAULDRON_FEATURES
    }
}

fn push_counts(out: &mut Vec<f32>, counts: [u8; NUM_CARD_TYPES]) {
    out.extend(counts.iter().map(|&c| f32::from(c)));
}

fn push_zeros(out: &mut Vec<f32>, len: usize) {
    out.resize(out.len() + len, 0.0);
}

fn encode_cauldron(out: &mut Vec<f32>, cauldron: &Cauldron) {
    out.push(f32::from(cauldron.total_value()));
    out.push(cauldron.len() as f32);
    out.push(f32::from(cauldron.color().raw()));
    push_counts(out, cauldron.type_counts());
}

impl StateEncoder for PoisonEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState {
        let n = state.player_count();
        let base = if perspective.index() < n {
            perspective
        } else {
            PlayerId::new(0)
        };
        let partial = self.mode == ObservationMode::Partial;
        let mut out = Vec::with_capacity(OBSERVATION_SIZE);

        out.push(n as f32);
        out.push(state.current_player().relative_to(base, n) as f32);
        out.push(state.dealer().relative_to(base, n) as f32);
        out.push(f32::from(state.round()));
        out.push(f32::from(state.variant().raw()));
        out.push(state.deck_remaining() as f32);

        for slot in 0..MAX_PLAYERS {
            if slot >= n {
                push_zeros(&mut out, SEAT_FEATURES);
                continue;
            }

            let seat = PlayerId::new(((base.index() + slot) % n) as u8);
            let player = &state.players()[seat];

            out.push(player.hand.len() as f32);
            out.push(player.collected.len() as f32);
            out.push(player.score as f32);

            if partial && seat != base {
                push_zeros(&mut out, NUM_CARD_TYPES);
            } else {
                push_counts(&mut out, player.hand.type_counts());
            }

            if partial && !state.is_round_scored() {
                push_zeros(&mut out, NUM_CARD_TYPES);
            } else {
                push_counts(&mut out, player.collected.type_counts());
            }
        }

        for cauldron in state.cauldrons() {
            encode_cauldron(&mut out, cauldron);
        }

        debug_assert_eq!(out.len(), OBSERVATION_SIZE);
        EncodedState::new(out, vec![OBSERVATION_SIZE])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![OBSERVATION_SIZE]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Color};
    use crate::core::Variant;
    use crate::games::poison::PoisonGameBuilder;

    fn dealt(players: usize, seed: u32) -> GameState {
        let (_game, state) = PoisonGameBuilder::new()
            .player_count(players)
            .build(seed)
            .unwrap();
        state
    }

    fn hand_counts(encoded: &EncodedState, slot: usize) -> &[f32] {
        encoded
            .slice(PoisonEncoder::seat_offset(slot) + 3, NUM_CARD_TYPES)
            .unwrap()
    }

    fn collected_counts(encoded: &EncodedState, slot: usize) -> &[f32] {
        encoded
            .slice(PoisonEncoder::seat_offset(slot) + 3 + NUM_CARD_TYPES, NUM_CARD_TYPES)
            .unwrap()
    }

    #[test]
    fn test_observation_size() {
        assert_eq!(OBSERVATION_SIZE, 273);
        let encoder = PoisonEncoder::full();
        assert_eq!(encoder.output_shape(), vec![273]);
        assert_eq!(encoder.action_space_size(), 150);
    }

    #[test]
    fn test_globals() {
        let state = dealt(4, 42);
        let encoded = PoisonEncoder::full().encode(&state, PlayerId::new(2));

        // 4 players, current seat 1 and dealer 0 seen from seat 2, round 1,
        // classic, nothing left to draw
        assert_eq!(encoded.slice(0, 6), Some(&[4.0, 3.0, 2.0, 1.0, 0.0, 0.0][..]));
    }

    #[test]
    fn test_draw_variant_globals() {
        let (_game, state) = PoisonGameBuilder::new()
            .player_count(3)
            .variant(Variant::Draw)
            .build(7)
            .unwrap();
        let encoded = PoisonEncoder::full().encode(&state, PlayerId::new(0));

        assert_eq!(encoded.get(4), Some(1.0));
        assert_eq!(encoded.get(5), Some(state.deck_remaining() as f32));
    }

    #[test]
    fn test_seat_rotation() {
        let state = dealt(3, 5);
        let encoded = PoisonEncoder::full().encode(&state, PlayerId::new(1));

        for slot in 0..3 {
            let seat = PlayerId::new(((1 + slot) % 3) as u8);
            let offset = PoisonEncoder::seat_offset(slot);
            let hand_len = state.hand(seat).unwrap().len();
            assert_eq!(encoded.get(offset), Some(hand_len as f32));
            let total: f32 = hand_counts(&encoded, slot).iter().sum();
            assert_eq!(total, hand_len as f32);
        }
    }

    #[test]
    fn test_unused_seats_are_zero() {
        let state = dealt(3, 5);
        let encoded = PoisonEncoder::full().encode(&state, PlayerId::new(0));

        let start = PoisonEncoder::seat_offset(3);
        let unused = encoded.slice(start, 3 * SEAT_FEATURES).unwrap();
        assert!(unused.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_partial_hides_other_hands() {
        let state = dealt(5, 13);
        let encoded = PoisonEncoder::partial().encode(&state, PlayerId::new(3));

        assert!(hand_counts(&encoded, 0).iter().sum::<f32>() > 0.0);
        for slot in 1..5 {
            assert!(hand_counts(&encoded, slot).iter().all(|&v| v == 0.0));
            // Sizes stay visible
            assert!(encoded.get(PoisonEncoder::seat_offset(slot)).unwrap() > 0.0);
        }
    }

    #[test]
    fn test_partial_hides_collected_until_scored() {
        let mut state = dealt(3, 13);
        let p1 = PlayerId::new(1);
        state.players[p1].collected.push(Card::poison()).unwrap();

        let encoder = PoisonEncoder::partial();
        let hidden = encoder.encode(&state, PlayerId::new(0));
        assert!(collected_counts(&hidden, 1).iter().all(|&v| v == 0.0));
        assert_eq!(hidden.get(PoisonEncoder::seat_offset(1) + 1), Some(1.0));

        state.round_scored = true;
        let shown = encoder.encode(&state, PlayerId::new(0));
        assert_eq!(collected_counts(&shown, 1)[15], 1.0);

        let full = PoisonEncoder::full().encode(&state, PlayerId::new(0));
        assert_eq!(collected_counts(&full, 1)[15], 1.0);
    }

    #[test]
    fn test_out_of_range_perspective_uses_seat_zero() {
        let state = dealt(4, 99);
        let encoder = PoisonEncoder::partial();

        assert_eq!(
            encoder.encode(&state, PlayerId::new(9)),
            encoder.encode(&state, PlayerId::new(0))
        );
    }

    #[test]
    fn test_cauldron_block() {
        let mut state = dealt(3, 1);
        state.cauldrons[2].add(Card::potion(Color::Blue, 5));
        state.cauldrons[2].add(Card::poison());

        let encoded = PoisonEncoder::full().encode(&state, PlayerId::new(0));
        let block = encoded
            .slice(PoisonEncoder::cauldron_offset(2), CAULDRON_FEATURES)
            .unwrap();

        assert_eq!(&block[..3], &[9.0, 2.0, 2.0]);
        // Blue 5 is type 1 * 5 + 3
        assert_eq!(block[3 + 8], 1.0);
        assert_eq!(block[3 + 15], 1.0);
        assert_eq!(block.iter().skip(3).sum::<f32>(), 2.0);
    }
}
