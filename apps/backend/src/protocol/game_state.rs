//! Wire DTOs for the games API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::player::{PlayerKind, PlayerProfile, ScoringPreference};
use crate::domain::rules::SubmissionPolicy;
use crate::domain::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::domain::throw_sim::ThrowOutcome;
use crate::domain::turn::{TurnKind, TurnResult};
use crate::errors::domain::DomainError;

/// Skill given to simulated players registered without one.
pub const DEFAULT_SIMULATED_SKILL: f64 = 60.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub starting_score: Option<u32>,
    #[serde(default)]
    pub submission_policy: Option<SubmissionPolicy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    /// `true` for a simulated player; real players report their own scores.
    #[serde(default)]
    pub simulated: bool,
    /// Three-dart average of a simulated player.
    #[serde(default)]
    pub skill: Option<f64>,
    /// `"twenties"` or `"nineteens"`; twenties when omitted.
    #[serde(default)]
    pub preference: Option<String>,
}

impl AddPlayerRequest {
    pub fn into_profile(self) -> Result<PlayerProfile, DomainError> {
        let preference = match self.preference.as_deref() {
            Some(raw) => ScoringPreference::from_str(raw)?,
            None => ScoringPreference::default(),
        };
        Ok(if self.simulated {
            PlayerProfile::simulated(
                self.name,
                self.skill.unwrap_or(DEFAULT_SIMULATED_SKILL),
                preference,
            )
        } else {
            PlayerProfile::real(self.name, preference)
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitScoreRequest {
    pub scores: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddPlayerResponse {
    pub player_id: Uuid,
    pub seat: usize,
    pub game: GameStateResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameStateResponse {
    pub game_id: Uuid,
    pub phase: &'static str,
    pub starting_score: u32,
    pub submission_policy: SubmissionPolicy,
    pub turn: u32,
    pub current_player: Option<usize>,
    pub current_player_name: Option<String>,
    pub awaiting_submission: bool,
    pub players: Vec<PlayerStateResponse>,
    pub last_turn_result: Option<TurnResultResponse>,
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateResponse {
    pub id: Uuid,
    pub name: String,
    pub simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<f64>,
    pub preference: ScoringPreference,
    pub remaining: u32,
    pub total_points: u32,
    pub darts_thrown: u32,
    pub turns: u32,
    pub three_dart_average: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TurnResultResponse {
    pub player_id: Uuid,
    pub player_name: String,
    pub kind: TurnKind,
    /// Simulated darts; empty for reported turns.
    pub darts: Vec<DartResponse>,
    pub dart_scores: Vec<u32>,
    pub total_score: u32,
    pub remaining: u32,
    pub three_dart_average: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DartResponse {
    /// Short label, e.g. `T20`, `D25` or `MISS`.
    pub label: String,
    pub ring: &'static str,
    pub number: u8,
    pub score: u32,
}

impl From<&ThrowOutcome> for DartResponse {
    fn from(outcome: &ThrowOutcome) -> Self {
        Self {
            label: outcome.target.to_string(),
            ring: outcome.ring().as_str(),
            number: outcome.target.number,
            score: outcome.score,
        }
    }
}

impl From<&TurnResult> for TurnResultResponse {
    fn from(result: &TurnResult) -> Self {
        Self {
            player_id: result.player_id,
            player_name: result.player_name.clone(),
            kind: result.kind,
            darts: result.throws.iter().map(DartResponse::from).collect(),
            dart_scores: result.dart_scores.clone(),
            total_score: result.total_score,
            remaining: result.remaining,
            three_dart_average: result.three_dart_average,
        }
    }
}

impl From<&PlayerSnapshot> for PlayerStateResponse {
    fn from(p: &PlayerSnapshot) -> Self {
        let skill = match p.kind {
            PlayerKind::Real => None,
            PlayerKind::Simulated { skill } => Some(skill),
        };
        Self {
            id: p.id,
            name: p.name.clone(),
            simulated: skill.is_some(),
            skill,
            preference: p.preference,
            remaining: p.remaining,
            total_points: p.total_points,
            darts_thrown: p.darts_thrown,
            turns: p.turns,
            three_dart_average: p.three_dart_average,
        }
    }
}

impl From<&GameSnapshot> for GameStateResponse {
    fn from(s: &GameSnapshot) -> Self {
        Self {
            game_id: s.game_id,
            phase: s.phase.as_str(),
            starting_score: s.starting_score,
            submission_policy: s.submission_policy,
            turn: s.turn,
            current_player: s.current_player,
            current_player_name: s.current().map(|p| p.name.clone()),
            awaiting_submission: s.awaiting_submission(),
            players: s.players.iter().map(PlayerStateResponse::from).collect(),
            last_turn_result: s.last_turn.as_ref().map(TurnResultResponse::from),
            winner: s.winner.clone(),
        }
    }
}

impl GameStateResponse {
    /// State with `last_turn_result` pinned to what this request produced.
    pub fn with_turn(snapshot: &GameSnapshot, turn: Option<&TurnResult>) -> Self {
        let mut response = Self::from(snapshot);
        response.last_turn_result = turn.map(TurnResultResponse::from);
        response
    }
}
