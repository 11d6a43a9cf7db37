//! Simulated turns driven by scripted hits.

use crate::domain::board::Target;
use crate::domain::fixtures::{CentredRng, PerfectThrower, ScriptedThrower};
use crate::domain::game::{GamePhase, GameSession};
use crate::domain::player::{PlayerProfile, ScoringPreference};
use crate::domain::test_prelude::{scripted_solo, sim};
use crate::domain::throw_sim::ThrowSimulator;
use crate::domain::turn::TurnKind;

#[test]
fn single_then_double_finishes_forty() {
    let mut game = scripted_solo(40, &[Target::single(20), Target::double(10)]);

    let result = game.play_turn().unwrap().expect("simulated turn");

    assert_eq!(result.kind, TurnKind::Win);
    assert_eq!(result.total_score, 40);
    assert_eq!(result.remaining, 0);
    assert_eq!(result.throws.len(), 2);
    assert_eq!(result.dart_scores, vec![20, 20]);
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.winner().map(|p| p.name.as_str()), Some("Anthony"));
}

#[test]
fn leaving_one_busts_and_reverts() {
    let mut game = scripted_solo(41, &[Target::single(20), Target::single(20), Target::single(1)]);

    let result = game.play_turn().unwrap().expect("simulated turn");

    assert_eq!(result.kind, TurnKind::Bust);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.remaining, 41);
    // Second dart leaves one; the third is never thrown.
    assert_eq!(result.throws.len(), 2);
    assert_eq!(game.phase(), GamePhase::InProgress);

    let player = game.current_profile().unwrap().id;
    let stats = game.stats(player).unwrap();
    assert_eq!(stats.remaining, 41);
    assert_eq!(stats.total_points, 0);
    assert_eq!(stats.darts_thrown, 0);
    assert_eq!(stats.turns, 1);
    assert_eq!(result.three_dart_average, 0.0);
}

#[test]
fn zero_off_a_single_busts() {
    let mut game = scripted_solo(20, &[Target::single(20)]);
    let result = game.play_turn().unwrap().unwrap();
    assert_eq!(result.kind, TurnKind::Bust);
    assert_eq!(result.remaining, 20);
}

#[test]
fn overshoot_busts() {
    let mut game = scripted_solo(32, &[Target::triple(20)]);
    let result = game.play_turn().unwrap().unwrap();
    assert_eq!(result.kind, TurnKind::Bust);
    assert_eq!(result.remaining, 32);
    assert_eq!(result.dart_scores, vec![60]);
}

#[test]
fn simulated_max_checkout_with_centred_rng() {
    let simulator = ThrowSimulator::with_rng(CentredRng);
    let mut game = GameSession::with_thrower(170, Box::new(simulator)).unwrap();
    let anthony = PlayerProfile::simulated("Anthony", 45.0, ScoringPreference::Twenties);
    game.add_player(anthony).unwrap();
    game.start().unwrap();

    let result = game.play_turn().unwrap().expect("simulated turn");

    assert_eq!(result.kind, TurnKind::Win);
    assert_eq!(result.total_score, 170);
    assert_eq!(result.remaining, 0);
    let hits: Vec<Target> = result.throws.iter().map(|t| t.target).collect();
    assert_eq!(hits, vec![Target::triple(20), Target::triple(20), Target::DOUBLE_BULL]);
    assert_eq!(game.phase(), GamePhase::Finished);
}

#[test]
fn max_checkout_follows_the_chart() {
    let thrower = ScriptedThrower::new([
        Target::triple(20),
        Target::triple(20),
        Target::DOUBLE_BULL,
    ]);
    let aims = thrower.aim_log();
    let mut game = GameSession::with_thrower(170, Box::new(thrower)).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();

    let result = game.play_turn().unwrap().unwrap();

    assert_eq!(result.kind, TurnKind::Win);
    assert_eq!(result.total_score, 170);
    assert_eq!(result.remaining, 0);
    // 170 and 110 both open on treble twenty; 50 is charted as 18 then double 16.
    assert_eq!(
        *aims.lock(),
        vec![Target::triple(20), Target::triple(20), Target::single(18)]
    );
}

#[test]
fn scoring_turn_commits_stats_and_rotates() {
    let mut game = GameSession::with_thrower(501, Box::new(PerfectThrower)).unwrap();
    let a = game.add_player(sim("Alice")).unwrap();
    let b = game.add_player(sim("Anthony")).unwrap();
    assert_eq!((a.seat, b.seat), (0, 1));
    game.start().unwrap();

    let first = game.play_turn().unwrap().unwrap();
    assert_eq!(first.kind, TurnKind::Scoring);
    assert_eq!(first.player_id, a.id);
    assert_eq!(first.total_score, 180);
    assert_eq!(first.remaining, 321);
    assert!((first.three_dart_average - 180.0).abs() < 1e-9);
    assert_eq!(game.current_seat(), Some(1));
    assert_eq!(game.turn(), 1);

    let second = game.play_turn().unwrap().unwrap();
    assert_eq!(second.player_id, b.id);
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(game.turn(), 2);

    let stats = game.stats(a.id).unwrap();
    assert_eq!(stats.darts_thrown, 3);
    assert_eq!(stats.total_points, 180);
    assert_eq!(stats.turns, 1);
}

#[test]
fn perfect_thrower_checks_out_nine_darts() {
    let mut game = GameSession::with_thrower(501, Box::new(PerfectThrower)).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();

    let kinds: Vec<TurnKind> = (0..3)
        .map(|_| game.play_turn().unwrap().unwrap().kind)
        .collect();

    // 180, 180, then 141 as T20 T19 D12.
    assert_eq!(kinds, vec![TurnKind::Scoring, TurnKind::Scoring, TurnKind::Win]);
    let snapshot = game.snapshot();
    assert!(snapshot.is_over());
    assert_eq!(snapshot.players[0].darts_thrown, 9);
    assert!((snapshot.players[0].three_dart_average - 167.0).abs() < 1e-9);
}

#[test]
fn misses_after_the_script_still_count_as_darts() {
    let mut game = scripted_solo(501, &[Target::triple(20)]);
    let result = game.play_turn().unwrap().unwrap();
    assert_eq!(result.kind, TurnKind::Scoring);
    assert_eq!(result.dart_scores, vec![60, 0, 0]);
    assert_eq!(result.remaining, 441);
    assert!((result.three_dart_average - 60.0).abs() < 1e-9);
}

#[test]
fn last_turn_and_snapshot_agree() {
    let mut game = scripted_solo(301, &[Target::triple(19), Target::single(5), Target::double(3)]);
    let result = game.play_turn().unwrap().unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.last_turn.as_ref(), Some(&result));
    assert_eq!(snapshot.players[0].remaining, 301 - 57 - 5 - 6);
    assert_eq!(snapshot.turn, 1);
}
