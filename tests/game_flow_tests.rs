//! End-to-end game flow tests.
//!
//! These drive whole rounds and games through the id-based `step` API the
//! way an RL environment or a front end would.

use poison_engine::core::{GameState, PlayerId, Variant};
use poison_engine::games::poison::{scoring, PoisonGame, PoisonGameBuilder, StepResult};
use poison_engine::rules::{GameResult, RulesEngine};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(players: usize, variant: Variant, seed: u32) -> (PoisonGame, GameState) {
    PoisonGameBuilder::new()
        .player_count(players)
        .variant(variant)
        .build(seed)
        .unwrap()
}

/// Step with the lowest legal action id (or 0 for an empty hand).
fn step_first_legal(game: &PoisonGame, state: &mut GameState) -> StepResult {
    let id = game.legal_actions(state).first().map_or(0, |a| a.id());
    game.step(state, id).unwrap()
}

/// Play the current round to its end. Returns the rewards seen.
fn play_round(game: &PoisonGame, state: &mut GameState) -> Vec<f32> {
    let mut rewards = Vec::new();
    for _ in 0..1_000 {
        let result = step_first_legal(game, state);
        rewards.push(result.reward);
        if result.round_done {
            return rewards;
        }
    }
    panic!("round did not finish");
}

/// Play until the game ends. Returns the number of rounds played.
fn play_game(game: &PoisonGame, state: &mut GameState) -> u8 {
    let mut rounds = 0;
    loop {
        play_round(game, state);
        rounds += 1;
        if state.is_game_over() {
            return rounds;
        }
        game.start_new_round(state).unwrap();
    }
}

fn total_collected(state: &GameState) -> usize {
    state
        .player_ids()
        .map(|p| state.collected(p).unwrap().len())
        .sum()
}

// =============================================================================
// Single Round
// =============================================================================

#[test]
fn test_three_player_first_legal_round() {
    init_logging();
    let (game, mut state) = build(3, Variant::Classic, 42);
    assert_eq!(state.deck().len(), 38);

    let rewards = play_round(&game, &mut state);

    // Every collected card came from an overflow reward
    let penalty: f32 = rewards.iter().map(|r| -r).sum();
    assert_eq!(penalty as usize, total_collected(&state));
    let recorded: usize = state.history().iter().map(|r| usize::from(r.collected)).sum();
    assert_eq!(recorded, total_collected(&state));

    assert!(state.is_round_scored());
    assert!(!state.is_game_over());
    for delta in scoring::round_scores(&state).values() {
        assert!(*delta <= 0);
    }
}

#[test]
fn test_round_scores_match_cumulative_after_one_round() {
    let (game, mut state) = build(5, Variant::Classic, 7);
    play_round(&game, &mut state);

    let deltas = scoring::round_scores(&state);
    for player in state.player_ids() {
        assert_eq!(state.score(player), Some(deltas[player]));
    }

    // Re-applying within the same round changes nothing
    let again = game.apply_round_scores(&mut state);
    assert_eq!(again, deltas);
    for player in state.player_ids() {
        assert_eq!(state.score(player), Some(deltas[player]));
    }
}

#[test]
fn test_every_card_is_played_once() {
    let (game, mut state) = build(4, Variant::Classic, 123);
    play_round(&game, &mut state);

    let on_table: usize = state.cauldrons().iter().map(|c| c.len()).sum();
    assert_eq!(on_table + total_collected(&state), 50);
    assert_eq!(state.history().len(), 50);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_full_games_play_all_rounds() {
    init_logging();
    for players in 3..=6 {
        let (game, mut state) = build(players, Variant::Classic, 1000 + players as u32);
        let rounds = play_game(&game, &mut state);

        assert_eq!(rounds, state.max_rounds());
        assert_eq!(state.round(), state.max_rounds());
        assert!(game.is_terminal(&state).is_some());
    }
}

#[test]
fn test_three_player_classic_plays_six_rounds() {
    let (game, mut state) = build(3, Variant::Classic, 5);
    assert_eq!(play_game(&game, &mut state), 6);
}

#[test]
fn test_draw_variant_is_single_round() {
    for players in 3..=6 {
        let (game, mut state) = build(players, Variant::Draw, 77);
        assert_eq!(play_game(&game, &mut state), 1);
        assert_eq!(state.deck_remaining(), 0);
    }
}

#[test]
fn test_finished_game_step_is_inert() {
    let (game, mut state) = build(4, Variant::Draw, 3);
    play_game(&game, &mut state);
    let before = state.clone();

    let result = game.step(&mut state, 0).unwrap();

    assert!(result.done);
    assert!(!result.action_legal);
    assert_eq!(result.reward, 0.0);
    assert_eq!(result.winner, game.winner(&state));
    assert_eq!(state, before);
}

#[test]
fn test_winner_matches_terminal_result() {
    for seed in 1..20 {
        let (game, mut state) = build(4, Variant::Classic, seed);
        play_game(&game, &mut state);

        match game.is_terminal(&state) {
            Some(GameResult::Winner(p)) => {
                assert_eq!(game.winner(&state), Some(p));
                let best = state.score(p).unwrap();
                for other in state.player_ids().filter(|&o| o != p) {
                    assert!(state.score(other).unwrap() < best);
                }
            }
            Some(GameResult::Draw) => assert_eq!(game.winner(&state), None),
            None => panic!("game should be over"),
        }
    }
}

#[test]
fn test_start_new_round_after_last_round_keeps_game_over() {
    let (game, mut state) = build(4, Variant::Classic, 9);
    play_game(&game, &mut state);
    let scores: Vec<_> = state.player_ids().map(|p| state.score(p)).collect();

    game.start_new_round(&mut state).unwrap();

    assert!(state.is_game_over());
    let after: Vec<_> = state.player_ids().map(|p| state.score(p)).collect();
    assert_eq!(scores, after);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let (game_a, mut a) = build(5, Variant::Classic, 2024);
    let (game_b, mut b) = build(5, Variant::Classic, 2024);
    assert_eq!(a, b);

    play_game(&game_a, &mut a);
    play_game(&game_b, &mut b);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_deal_differently() {
    let (_, a) = build(4, Variant::Classic, 1);
    let (_, b) = build(4, Variant::Classic, 2);
    assert_ne!(a.deck().cards(), b.deck().cards());
}

#[test]
fn test_zero_seed_matches_default_seed() {
    let (_, zero) = build(3, Variant::Classic, 0);
    let (_, default) = build(3, Variant::Classic, 0x9E37_79B9);
    assert_eq!(zero, default);
}

#[test]
fn test_reset_continues_rng_stream() {
    let (game, mut state) = build(4, Variant::Classic, 42);
    let first_deck = state.deck().cards().to_vec();
    let rng_before = state.rng().state();

    game.reset(&mut state).unwrap();

    assert_ne!(state.rng().state(), rng_before);
    assert_ne!(state.deck().cards(), &first_deck[..]);
    assert_eq!(state.round(), 1);
    assert_eq!(state.dealer(), PlayerId::new(0));
}

#[test]
fn test_new_round_rotates_dealer_and_first_player() {
    let (game, mut state) = build(4, Variant::Classic, 31);

    for round in 1..4u8 {
        assert_eq!(state.round(), round);
        assert_eq!(state.dealer(), PlayerId::new(round - 1));
        assert_eq!(state.current_player(), PlayerId::new(round % 4));
        play_round(&game, &mut state);
        game.start_new_round(&mut state).unwrap();
    }
}
