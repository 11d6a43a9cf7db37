//! Property tests for throw simulation and turn bookkeeping (pure domain).
//!
//! Properties tested:
//! - Every simulated outcome is a real board score
//! - Dispersion stays within its clamp for any skill
//! - No committed turn ever leaves a player on one
//! - Remaining never rises and busts never move it

use proptest::prelude::*;

use crate::domain::board::{is_achievable_score, BoardGeometry, Ring, BOARD_RADIUS};
use crate::domain::fixtures::ScriptedThrower;
use crate::domain::game::{GamePhase, GameSession};
use crate::domain::rules::MAX_DART_SCORE;
use crate::domain::test_prelude::{self, sim};
use crate::domain::throw_sim::{
    dispersion_for_skill, DartThrower, ThrowSimulator, MAX_DISPERSION, MIN_DISPERSION,
};
use crate::domain::turn::TurnKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any aim, any scatter, the hit is something the board can score
    #[test]
    fn prop_outcomes_are_board_scores(
        target in crate::domain::test_gens::target(),
        dispersion in crate::domain::test_gens::dispersion(),
        seed in any::<u64>(),
    ) {
        let mut sim = ThrowSimulator::new(Some(seed));
        for _ in 0..16 {
            let outcome = sim.throw(target, dispersion);
            prop_assert!(outcome.target.is_valid());
            prop_assert_eq!(outcome.score, outcome.target.score());
            prop_assert!(is_achievable_score(outcome.score));
            prop_assert!(outcome.score <= MAX_DART_SCORE);
        }
    }

    /// Property: classification agrees with radius bands
    #[test]
    fn prop_classify_point_respects_board_edge(
        x in -250.0f64..250.0,
        y in -250.0f64..250.0,
    ) {
        let hit = BoardGeometry::standard().classify_point(x, y);
        let radius = x.hypot(y);
        prop_assert_eq!(hit.ring == Ring::Miss, radius > BOARD_RADIUS);
    }

    /// Property: dispersion is clamped for every skill
    #[test]
    fn prop_dispersion_clamped(skill in crate::domain::test_gens::skill()) {
        let d = dispersion_for_skill(skill);
        prop_assert!((MIN_DISPERSION..=MAX_DISPERSION).contains(&d));
    }

    /// Property: committed turns never leave one, never raise remaining
    #[test]
    fn prop_turns_never_commit_one(
        start in crate::domain::test_gens::playable_score(),
        hits in prop::collection::vec(crate::domain::test_gens::target(), 3..60),
    ) {
        let mut game = GameSession::with_thrower(
            start,
            Box::new(ScriptedThrower::new(hits)),
        ).unwrap();
        game.add_player(sim("Anthony")).unwrap();
        game.start().unwrap();

        let mut remaining = start;
        for _ in 0..20 {
            if game.phase() == GamePhase::Finished {
                break;
            }
            let result = game.play_turn().unwrap().unwrap();
            prop_assert_ne!(result.remaining, 1);
            prop_assert!(result.remaining <= remaining);
            match result.kind {
                TurnKind::Bust => {
                    prop_assert_eq!(result.remaining, remaining);
                    prop_assert_eq!(result.total_score, 0);
                }
                TurnKind::Win => prop_assert_eq!(result.remaining, 0),
                TurnKind::Scoring => {
                    prop_assert_eq!(result.total_score, remaining - result.remaining);
                    prop_assert_eq!(result.dart_scores.len(), 3);
                }
            }
            remaining = result.remaining;
        }
    }

    /// Property: real randomness upholds the same bookkeeping
    #[test]
    fn prop_simulated_games_stay_consistent(
        seed in any::<u64>(),
        skill in crate::domain::test_gens::skill(),
    ) {
        let mut game = GameSession::seeded(301, seed).unwrap();
        game.add_player(crate::domain::player::PlayerProfile::simulated(
            "Anthony",
            skill,
            crate::domain::player::ScoringPreference::Nineteens,
        ))
        .unwrap();
        game.start().unwrap();

        for _ in 0..60 {
            if game.phase() == GamePhase::Finished {
                break;
            }
            let result = game.play_turn().unwrap().unwrap();
            prop_assert_ne!(result.remaining, 1);
        }
        let snap = game.snapshot();
        let p = &snap.players[0];
        prop_assert_eq!(p.total_points, 301 - p.remaining);
    }
}
