use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_STARTING_SCORE: u32 = 501;
pub const DARTS_PER_TURN: usize = 3;
/// Lowest score a player can still finish from (a double one).
pub const MIN_CHECKOUT: u32 = 2;
/// Highest three-dart finish (treble twenty, treble twenty, bull).
pub const MAX_CHECKOUT: u32 = 170;
/// Highest single-dart score (treble twenty).
pub const MAX_DART_SCORE: u32 = 60;

/// How externally reported scores are applied to a real player's total.
///
/// Simulated turns always enforce the double-out rule; reported scores carry no
/// ring information, so the strictness there is a per-game choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Any score reaching or passing zero wins; the total is clamped at zero.
    #[default]
    Lenient,
    /// Overshooting zero or leaving one busts; exactly zero wins.
    Strict,
}

impl SubmissionPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            SubmissionPolicy::Lenient => "lenient",
            SubmissionPolicy::Strict => "strict",
        }
    }
}

impl FromStr for SubmissionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(SubmissionPolicy::Lenient),
            "strict" => Ok(SubmissionPolicy::Strict),
            other => Err(DomainError::validation(
                ValidationKind::Other("submission_policy".into()),
                format!("unknown submission policy '{other}' (expected lenient or strict)"),
            )),
        }
    }
}

/// A starting score must leave room for at least a double-one finish.
pub fn validate_starting_score(score: u32) -> Result<u32, DomainError> {
    if score < MIN_CHECKOUT {
        return Err(DomainError::validation(
            ValidationKind::InvalidStartingScore,
            format!("starting score must be greater than 1, got {score}"),
        ));
    }
    Ok(score)
}
