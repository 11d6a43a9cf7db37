pub mod games;

pub use games::{GameRegistry, TurnOutcome};
