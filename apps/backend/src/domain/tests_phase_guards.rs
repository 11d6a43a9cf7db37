//! Lobby / in-progress / finished transitions and what each phase allows.

use crate::domain::board::Target;
use crate::domain::fixtures::PerfectThrower;
use crate::domain::game::{GamePhase, GameSession};
use crate::domain::test_prelude::{real, scripted_solo, sim};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[test]
fn starting_score_below_two_is_rejected() {
    for start in [0, 1] {
        let err = GameSession::new(start).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidStartingScore, _)
        ));
    }
    assert!(GameSession::new(2).is_ok());
}

#[test]
fn empty_roster_cannot_start() {
    let mut game = GameSession::new(501).unwrap();
    let err = game.start().unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::EmptyRoster, _)));
    assert_eq!(game.phase(), GamePhase::Lobby);
    assert_eq!(game.current_seat(), None);
}

#[test]
fn start_is_idempotent_while_running() {
    let mut game = GameSession::new(501).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();
    game.start().unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
}

#[test]
fn turns_need_a_started_game() {
    let mut game = GameSession::new(501).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    let err = game.play_turn().unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameNotStarted, _)));
}

#[test]
fn roster_is_frozen_once_started() {
    let mut game = GameSession::new(501).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();
    let err = game.add_player(sim("Late")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameAlreadyStarted, _)
    ));
    assert_eq!(game.player_count(), 1);
}

#[test]
fn blank_and_overlong_names_are_rejected() {
    let mut game = GameSession::new(501).unwrap();
    let long = "x".repeat(65);
    for name in ["", "   ", long.as_str()] {
        let err = game.add_player(sim(name)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidPlayerName, _)
        ));
    }
    assert_eq!(game.player_count(), 0);
}

#[test]
fn finished_game_refuses_more_turns() {
    let mut game = scripted_solo(50, &[Target::DOUBLE_BULL]);
    assert!(game.play_turn().unwrap().unwrap().is_win());
    assert_eq!(game.phase(), GamePhase::Finished);
    // Winner keeps the throw; rotation stops.
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(game.turn(), 1);

    let err = game.play_turn().unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameOver, _)));
    let err = game.submit_score(&[20]).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameOver, _)));
}

#[test]
fn real_player_suspends_the_turn() {
    let mut game = GameSession::with_thrower(501, Box::new(PerfectThrower)).unwrap();
    game.add_player(real("Alice")).unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();

    assert_eq!(game.play_turn().unwrap(), None);
    // Nothing moved.
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(game.turn(), 0);
    assert!(game.snapshot().awaiting_submission());

    game.submit_score(&[60, 60, 60]).unwrap();
    assert_eq!(game.current_seat(), Some(1));
    assert!(!game.snapshot().awaiting_submission());
    assert!(game.play_turn().unwrap().is_some());
}

#[test]
fn next_player_wraps_around() {
    let mut game = GameSession::new(501).unwrap();
    game.next_player();
    assert_eq!(game.current_seat(), None);

    for name in ["A", "B", "C"] {
        game.add_player(sim(name)).unwrap();
    }
    let seats: Vec<usize> = (0..4)
        .map(|_| {
            game.next_player();
            game.current_seat().unwrap()
        })
        .collect();
    assert_eq!(seats, vec![1, 2, 0, 1]);
}

#[test]
fn unknown_player_stats_are_not_found() {
    let game = GameSession::new(501).unwrap();
    let err = game.stats(uuid::Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_, _)));
}
