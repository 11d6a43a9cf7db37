//! Per-dart verdicts and the result of a finished turn.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::throw_sim::ThrowOutcome;

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    /// All darts thrown without busting or finishing.
    Scoring,
    /// Overshot, left one, or reached zero off a non-double; score reverts.
    Bust,
    /// Checked out; the leg is over.
    Win,
}

impl TurnKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TurnKind::Scoring => "scoring",
            TurnKind::Bust => "bust",
            TurnKind::Win => "win",
        }
    }
}

/// What one dart does to the running score within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DartVerdict {
    Bust,
    Win,
    Continue { remaining: u32 },
}

/// Apply the double-out rule to a thrown dart.
pub fn classify_dart(remaining: u32, outcome: &ThrowOutcome) -> DartVerdict {
    match remaining.checked_sub(outcome.score) {
        None | Some(1) => DartVerdict::Bust,
        Some(0) if outcome.is_double() => DartVerdict::Win,
        Some(0) => DartVerdict::Bust,
        Some(left) => DartVerdict::Continue { remaining: left },
    }
}

/// Apply a reported score when the ring is unknown: zero is trusted as a
/// double finish, overshooting or leaving one busts.
pub fn classify_reported(remaining: u32, score: u32) -> DartVerdict {
    match remaining.checked_sub(score) {
        None | Some(1) => DartVerdict::Bust,
        Some(0) => DartVerdict::Win,
        Some(left) => DartVerdict::Continue { remaining: left },
    }
}

/// Outcome of one player's turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnResult {
    pub kind: TurnKind,
    pub player_id: Uuid,
    pub player_name: String,
    /// Simulated darts as thrown, the busting dart included. Empty for reported turns.
    pub throws: Vec<ThrowOutcome>,
    /// Per-dart scores that were applied (or, on a bust, attempted).
    pub dart_scores: Vec<u32>,
    /// Points that counted this turn; zero on a bust.
    pub total_score: u32,
    pub remaining: u32,
    pub three_dart_average: f64,
}

impl TurnResult {
    pub fn is_win(&self) -> bool {
        self.kind == TurnKind::Win
    }
}
