//! Shared helpers for domain unit tests.

use std::env;

use proptest::prelude::ProptestConfig;

use crate::domain::board::Target;
use crate::domain::fixtures::ScriptedThrower;
use crate::domain::game::GameSession;
use crate::domain::player::{PlayerProfile, ScoringPreference};

/// Proptest config honouring `PROPTEST_CASES`; low default for fast CI.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Started game whose single simulated player throws `hits` in order.
pub fn scripted_solo(start: u32, hits: &[Target]) -> GameSession {
    let mut game = GameSession::with_thrower(
        start,
        Box::new(ScriptedThrower::new(hits.iter().copied())),
    )
    .unwrap();
    game.add_player(sim("Anthony")).unwrap();
    game.start().unwrap();
    game
}

pub fn sim(name: &str) -> PlayerProfile {
    PlayerProfile::simulated(name, 60.0, ScoringPreference::Twenties)
}

pub fn real(name: &str) -> PlayerProfile {
    PlayerProfile::real(name, ScoringPreference::Twenties)
}
