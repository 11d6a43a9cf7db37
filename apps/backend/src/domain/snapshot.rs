//! Read-only projections of a game for display.

use uuid::Uuid;

use crate::domain::game::GamePhase;
use crate::domain::player::{PlayerKind, ScoringPreference};
use crate::domain::rules::SubmissionPolicy;
use crate::domain::turn::TurnResult;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub kind: PlayerKind,
    pub preference: ScoringPreference,
    pub remaining: u32,
    pub total_points: u32,
    pub darts_thrown: u32,
    pub turns: u32,
    pub three_dart_average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub phase: GamePhase,
    pub starting_score: u32,
    pub submission_policy: SubmissionPolicy,
    /// Finished turns across all players.
    pub turn: u32,
    /// Seat whose turn it is; `None` while the roster is empty.
    pub current_player: Option<usize>,
    pub players: Vec<PlayerSnapshot>,
    pub last_turn: Option<TurnResult>,
    pub winner: Option<String>,
}

impl GameSnapshot {
    pub fn current(&self) -> Option<&PlayerSnapshot> {
        self.current_player.and_then(|seat| self.players.get(seat))
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// A real player is up and the game is waiting for their scores.
    pub fn awaiting_submission(&self) -> bool {
        self.phase == GamePhase::InProgress
            && self
                .current()
                .is_some_and(|p| matches!(p.kind, PlayerKind::Real))
    }
}
