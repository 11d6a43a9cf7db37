//! Error codes for the dartbuddy API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the dartbuddy API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Starting score must be greater than one
    InvalidStartingScore,
    /// A submission must carry between one and three darts
    InvalidDartCount,
    /// A submitted dart score no single dart can produce
    InvalidDartScore,
    /// Unknown scoring preference string
    InvalidPreference,
    /// Empty or oversized player name
    InvalidPlayerName,
    /// Game started without players
    EmptyRoster,
    /// Malformed game identifier in the path
    InvalidGameId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Game Phase Conflicts
    /// Players can no longer be added
    GameAlreadyStarted,
    /// Turn requested before the game started
    GameNotStarted,
    /// Turn requested after a player has checked out
    GameOver,
    /// Score submitted while a simulated player is up
    NotRealPlayer,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Turn state reached an impossible configuration
    InvariantViolation,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidStartingScore => "INVALID_STARTING_SCORE",
            Self::InvalidDartCount => "INVALID_DART_COUNT",
            Self::InvalidDartScore => "INVALID_DART_SCORE",
            Self::InvalidPreference => "INVALID_PREFERENCE",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::EmptyRoster => "EMPTY_ROSTER",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameOver => "GAME_OVER",
            Self::NotRealPlayer => "NOT_REAL_PLAYER",
            Self::Conflict => "CONFLICT",

            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
