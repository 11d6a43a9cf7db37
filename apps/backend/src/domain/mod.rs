//! Domain layer: pure darts logic with no HTTP or process concerns.

pub mod board;
pub mod checkout;
pub mod fixtures;
pub mod game;
pub mod player;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod throw_sim;
pub mod turn;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game_turns;
#[cfg(test)]
mod tests_phase_guards;
#[cfg(test)]
mod tests_props_throw;
#[cfg(test)]
mod tests_submissions;

// Re-exports for ergonomics
pub use board::{BoardGeometry, Ring, Target};
pub use checkout::CheckoutChart;
pub use game::{GamePhase, GameSession, PlayerHandle};
pub use player::{PlayerKind, PlayerProfile, PlayerStats, ScoringPreference};
pub use rules::{SubmissionPolicy, DEFAULT_STARTING_SCORE};
pub use seed_derivation::derive_simulator_seed;
pub use snapshot::{GameSnapshot, PlayerSnapshot};
pub use throw_sim::{dispersion_for_skill, DartThrower, ThrowOutcome, ThrowSimulator};
pub use turn::{TurnKind, TurnResult};
