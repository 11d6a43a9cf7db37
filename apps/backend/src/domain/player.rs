//! Player profiles and per-game statistics.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::board::Target;
use crate::errors::domain::{DomainError, ValidationKind};

/// Which treble a player goes for when no finish is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPreference {
    #[default]
    Twenties,
    Nineteens,
}

impl ScoringPreference {
    pub const fn scoring_target(self) -> Target {
        match self {
            ScoringPreference::Twenties => Target::triple(20),
            ScoringPreference::Nineteens => Target::triple(19),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ScoringPreference::Twenties => "twenties",
            ScoringPreference::Nineteens => "nineteens",
        }
    }
}

impl FromStr for ScoringPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twenties" | "20" => Ok(ScoringPreference::Twenties),
            "nineteens" | "19" => Ok(ScoringPreference::Nineteens),
            other => Err(DomainError::validation(
                ValidationKind::InvalidPreference,
                format!("unknown scoring preference '{other}' (expected twenties or nineteens)"),
            )),
        }
    }
}

/// Who throws the darts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerKind {
    /// Scores are reported by a person; the game waits for them.
    Real,
    /// Darts are simulated from a three-dart average.
    Simulated { skill: f64 },
}

/// Identity and playing style, supplied by whoever registers the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub id: Uuid,
    pub name: String,
    pub kind: PlayerKind,
    pub preference: ScoringPreference,
}

impl PlayerProfile {
    pub fn real(name: impl Into<String>, preference: ScoringPreference) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: PlayerKind::Real,
            preference,
        }
    }

    pub fn simulated(name: impl Into<String>, skill: f64, preference: ScoringPreference) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: PlayerKind::Simulated { skill },
            preference,
        }
    }

    pub fn skill(&self) -> Option<f64> {
        match self.kind {
            PlayerKind::Real => None,
            PlayerKind::Simulated { skill } => Some(skill),
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.kind, PlayerKind::Simulated { .. })
    }
}

/// Running totals for one player in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub remaining: u32,
    pub total_points: u32,
    pub darts_thrown: u32,
    pub turns: u32,
}

impl PlayerStats {
    pub fn new(starting_score: u32) -> Self {
        Self {
            remaining: starting_score,
            total_points: 0,
            darts_thrown: 0,
            turns: 0,
        }
    }

    /// Points per three darts; 0.0 before the first counted dart.
    pub fn three_dart_average(&self) -> f64 {
        three_dart_average(self.total_points, self.darts_thrown)
    }
}

/// Points per three darts; `0.0` before any dart is thrown.
pub fn three_dart_average(total_points: u32, darts_thrown: u32) -> f64 {
    if darts_thrown == 0 {
        return 0.0;
    }
    f64::from(total_points) / f64::from(darts_thrown) * 3.0
}
