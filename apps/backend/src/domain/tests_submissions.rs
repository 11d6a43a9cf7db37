//! Externally reported scores for real players.

use crate::domain::game::{validate_submission, GameSession};
use crate::domain::rules::SubmissionPolicy;
use crate::domain::test_prelude::{real, sim};
use crate::domain::turn::TurnKind;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn real_solo(start: u32, policy: SubmissionPolicy) -> GameSession {
    let mut game = GameSession::new(start).unwrap().with_policy(policy);
    game.add_player(real("Alice")).unwrap();
    game.start().unwrap();
    game
}

#[test]
fn one_eighty_from_one_eighty_wins() {
    let mut game = real_solo(180, SubmissionPolicy::Lenient);
    let result = game.submit_score(&[60, 60, 60]).unwrap();
    assert_eq!(result.kind, TurnKind::Win);
    assert_eq!(result.remaining, 0);
    assert_eq!(result.total_score, 180);
    assert!(result.throws.is_empty());
    assert!(game.snapshot().is_over());
}

#[test]
fn strict_policy_also_wins_on_exact_zero() {
    let mut game = real_solo(180, SubmissionPolicy::Strict);
    assert!(game.submit_score(&[60, 60, 60]).unwrap().is_win());
}

#[test]
fn lenient_clamps_overshoot_to_a_win() {
    let mut game = real_solo(100, SubmissionPolicy::Lenient);
    let result = game.submit_score(&[60, 60]).unwrap();
    assert_eq!(result.kind, TurnKind::Win);
    assert_eq!(result.remaining, 0);
    assert_eq!(result.total_score, 100);
    assert_eq!(result.dart_scores, vec![60, 60]);
}

#[test]
fn strict_overshoot_busts() {
    let mut game = real_solo(100, SubmissionPolicy::Strict);
    let result = game.submit_score(&[60, 60]).unwrap();
    assert_eq!(result.kind, TurnKind::Bust);
    assert_eq!(result.remaining, 100);
    assert_eq!(result.total_score, 0);
}

#[test]
fn strict_leaving_one_busts() {
    let mut game = real_solo(61, SubmissionPolicy::Strict);
    let result = game.submit_score(&[60]).unwrap();
    assert_eq!(result.kind, TurnKind::Bust);
    assert_eq!(result.remaining, 61);
}

#[test]
fn partial_turn_scores_and_counts_darts() {
    let mut game = real_solo(501, SubmissionPolicy::Lenient);
    let result = game.submit_score(&[20, 5]).unwrap();
    assert_eq!(result.kind, TurnKind::Scoring);
    assert_eq!(result.remaining, 476);
    let stats = game.stats(result.player_id).unwrap();
    assert_eq!(stats.darts_thrown, 2);
    assert!((result.three_dart_average - 37.5).abs() < 1e-9);
}

#[test]
fn malformed_submissions_are_rejected() {
    assert!(matches!(
        validate_submission(&[]),
        Err(DomainError::Validation(ValidationKind::InvalidDartCount, _))
    ));
    assert!(matches!(
        validate_submission(&[1, 2, 3, 4]),
        Err(DomainError::Validation(ValidationKind::InvalidDartCount, _))
    ));
    for bad in [23, 59, 61, 180] {
        assert!(matches!(
            validate_submission(&[bad]),
            Err(DomainError::Validation(ValidationKind::InvalidDartScore, _))
        ));
    }
    assert!(validate_submission(&[0, 50, 57]).is_ok());
}

#[test]
fn rejected_submission_leaves_the_game_untouched() {
    let mut game = real_solo(501, SubmissionPolicy::Lenient);
    assert!(game.submit_score(&[61]).is_err());
    assert_eq!(game.turn(), 0);
    assert!(game.last_turn().is_none());
}

#[test]
fn simulated_players_cannot_submit() {
    let mut game = GameSession::new(501).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();
    let err = game.submit_score(&[60]).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::NotRealPlayer, _)));
}

#[test]
fn submissions_need_a_started_game() {
    let mut game = GameSession::new(501).unwrap();
    game.add_player(real("Alice")).unwrap();
    let err = game.submit_score(&[60]).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameNotStarted, _)));
}
