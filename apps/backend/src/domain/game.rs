//! X01 game session: roster, rotation and the turn state machine.
//!
//! A turn for a simulated player runs synchronously to completion. A turn
//! for a real player suspends (returns `None`) until `submit_score` is
//! called with the darts they reported.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::board::is_achievable_score;
use crate::domain::checkout::CheckoutChart;
use crate::domain::player::{PlayerKind, PlayerProfile, PlayerStats};
use crate::domain::rules::{validate_starting_score, SubmissionPolicy, DARTS_PER_TURN};
use crate::domain::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::domain::throw_sim::{dispersion_for_skill, DartThrower, ThrowOutcome, ThrowSimulator};
use crate::domain::turn::{classify_dart, classify_reported, DartVerdict, TurnKind, TurnResult};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Longest player name accepted.
pub const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting players.
    Lobby,
    /// Turn order fixed; turns are being played.
    InProgress,
    /// Someone checked out.
    Finished,
}

impl GamePhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::Lobby => "lobby",
            GamePhase::InProgress => "in_progress",
            GamePhase::Finished => "finished",
        }
    }
}

/// Returned from [`GameSession::add_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHandle {
    pub id: Uuid,
    pub seat: usize,
}

#[derive(Debug, Clone)]
struct SeatedPlayer {
    profile: Arc<PlayerProfile>,
    stats: PlayerStats,
}

/// Darts of one turn, before they are committed.
struct TurnTally {
    kind: TurnKind,
    remaining: u32,
    throws: Vec<ThrowOutcome>,
    dart_scores: Vec<u32>,
}

pub struct GameSession {
    id: Uuid,
    starting_score: u32,
    policy: SubmissionPolicy,
    players: Vec<SeatedPlayer>,
    current: usize,
    turn: u32,
    phase: GamePhase,
    winner: Option<usize>,
    last_turn: Option<TurnResult>,
    chart: CheckoutChart,
    thrower: Box<dyn DartThrower>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("starting_score", &self.starting_score)
            .field("phase", &self.phase)
            .field("players", &self.players.len())
            .field("current", &self.current)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// New game with an entropy-seeded simulator.
    pub fn new(starting_score: u32) -> Result<Self, DomainError> {
        Self::with_thrower(starting_score, Box::new(ThrowSimulator::new(None)))
    }

    /// New game with a reproducible simulator.
    pub fn seeded(starting_score: u32, seed: u64) -> Result<Self, DomainError> {
        Self::with_thrower(starting_score, Box::new(ThrowSimulator::new(Some(seed))))
    }

    /// New game throwing through `thrower`.
    pub fn with_thrower(
        starting_score: u32,
        thrower: Box<dyn DartThrower>,
    ) -> Result<Self, DomainError> {
        let starting_score = validate_starting_score(starting_score)?;
        Ok(Self {
            id: Uuid::new_v4(),
            starting_score,
            policy: SubmissionPolicy::default(),
            players: Vec::new(),
            current: 0,
            turn: 0,
            phase: GamePhase::Lobby,
            winner: None,
            last_turn: None,
            chart: CheckoutChart::new(),
            thrower,
        })
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat whose turn it is; `None` with an empty roster.
    pub fn current_seat(&self) -> Option<usize> {
        (!self.players.is_empty()).then_some(self.current)
    }

    pub fn current_profile(&self) -> Option<&PlayerProfile> {
        self.players.get(self.current).map(|p| p.profile.as_ref())
    }

    pub fn winner(&self) -> Option<&PlayerProfile> {
        self.winner
            .and_then(|seat| self.players.get(seat))
            .map(|p| p.profile.as_ref())
    }

    pub fn last_turn(&self) -> Option<&TurnResult> {
        self.last_turn.as_ref()
    }

    /// Stats for the player registered under `player_id`.
    pub fn stats(&self, player_id: Uuid) -> Result<PlayerStats, DomainError> {
        self.players
            .iter()
            .find(|p| p.profile.id == player_id)
            .map(|p| p.stats)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("player {player_id} is not in game {}", self.id),
                )
            })
    }

    /// Seat a player. Seating order is turn order.
    pub fn add_player(
        &mut self,
        profile: impl Into<Arc<PlayerProfile>>,
    ) -> Result<PlayerHandle, DomainError> {
        if self.phase != GamePhase::Lobby {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "players cannot join once the game has started",
            ));
        }
        let profile = profile.into();
        let name = profile.name.trim();
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerName,
                format!("player name must be 1 to {MAX_NAME_LEN} characters"),
            ));
        }

        let handle = PlayerHandle {
            id: profile.id,
            seat: self.players.len(),
        };
        info!(
            game_id = %self.id,
            player = %profile.name,
            seat = handle.seat,
            simulated = profile.is_simulated(),
            "player joined"
        );
        self.players.push(SeatedPlayer {
            profile,
            stats: PlayerStats::new(self.starting_score),
        });
        Ok(handle)
    }

    /// Fix the turn order. Calling it again on a running game does nothing.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.players.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyRoster,
                "cannot start a game with no players",
            ));
        }
        if self.phase == GamePhase::Lobby {
            self.phase = GamePhase::InProgress;
            info!(game_id = %self.id, players = self.players.len(), "game started");
        }
        Ok(())
    }

    /// Pass the throw to the next seat.
    pub fn next_player(&mut self) {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
    }

    /// Play the current player's turn.
    ///
    /// Returns `Ok(None)` when a real player is up: nothing happens until
    /// their darts arrive through [`GameSession::submit_score`].
    pub fn play_turn(&mut self) -> Result<Option<TurnResult>, DomainError> {
        self.require_in_progress()?;
        let seat = self.current;
        let player = &self.players[seat];

        let dispersion = match player.profile.kind {
            PlayerKind::Real => {
                info!(
                    game_id = %self.id,
                    player = %player.profile.name,
                    "awaiting score submission"
                );
                return Ok(None);
            }
            PlayerKind::Simulated { skill } => dispersion_for_skill(skill),
        };
        let preference = player.profile.preference;
        let mut remaining = player.stats.remaining;

        debug!(
            player = %player.profile.name,
            remaining,
            average = player.stats.three_dart_average(),
            "simulated turn"
        );

        let mut tally = TurnTally {
            kind: TurnKind::Scoring,
            remaining,
            throws: Vec::with_capacity(DARTS_PER_TURN),
            dart_scores: Vec::with_capacity(DARTS_PER_TURN),
        };

        for dart in 1..=DARTS_PER_TURN {
            let aim = self.chart.next_target(remaining, preference)?;
            let outcome = self.thrower.throw(aim, dispersion);
            debug!(dart, aim = %aim, hit = %outcome.target, score = outcome.score, "dart");

            tally.throws.push(outcome);
            tally.dart_scores.push(outcome.score);

            match classify_dart(remaining, &outcome) {
                DartVerdict::Bust => {
                    tally.kind = TurnKind::Bust;
                    break;
                }
                DartVerdict::Win => {
                    remaining = 0;
                    tally.kind = TurnKind::Win;
                    break;
                }
                DartVerdict::Continue { remaining: left } => remaining = left,
            }
        }
        tally.remaining = remaining;

        Ok(Some(self.finish_turn(seat, tally)?))
    }

    /// Apply darts reported for the current (real) player.
    ///
    /// `scores` must hold one to three achievable single-dart values.
    pub fn submit_score(&mut self, scores: &[u32]) -> Result<TurnResult, DomainError> {
        validate_submission(scores)?;
        self.require_in_progress()?;
        let seat = self.current;
        let player = &self.players[seat];
        if player.profile.is_simulated() {
            return Err(DomainError::conflict(
                ConflictKind::NotRealPlayer,
                format!(
                    "{} is simulated; use a simulated turn instead",
                    player.profile.name
                ),
            ));
        }

        let mut remaining = player.stats.remaining;
        let mut tally = TurnTally {
            kind: TurnKind::Scoring,
            remaining,
            throws: Vec::new(),
            dart_scores: Vec::with_capacity(scores.len()),
        };

        for &score in scores {
            tally.dart_scores.push(score);
            match self.policy {
                SubmissionPolicy::Lenient => {
                    if score >= remaining {
                        remaining = 0;
                        tally.kind = TurnKind::Win;
                        break;
                    }
                    remaining -= score;
                }
                SubmissionPolicy::Strict => match classify_reported(remaining, score) {
                    DartVerdict::Bust => {
                        warn!(game_id = %self.id, score, remaining, "reported score busts");
                        tally.kind = TurnKind::Bust;
                        break;
                    }
                    DartVerdict::Win => {
                        remaining = 0;
                        tally.kind = TurnKind::Win;
                        break;
                    }
                    DartVerdict::Continue { remaining: left } => remaining = left,
                },
            }
        }
        tally.remaining = remaining;

        self.finish_turn(seat, tally)
    }

    /// Read-only view of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.id,
            phase: self.phase,
            starting_score: self.starting_score,
            submission_policy: self.policy,
            turn: self.turn,
            current_player: self.current_seat(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.profile.id,
                    name: p.profile.name.clone(),
                    kind: p.profile.kind,
                    preference: p.profile.preference,
                    remaining: p.stats.remaining,
                    total_points: p.stats.total_points,
                    darts_thrown: p.stats.darts_thrown,
                    turns: p.stats.turns,
                    three_dart_average: p.stats.three_dart_average(),
                })
                .collect(),
            last_turn: self.last_turn.clone(),
            winner: self.winner().map(|p| p.name.clone()),
        }
    }

    fn require_in_progress(&self) -> Result<(), DomainError> {
        match self.phase {
            GamePhase::InProgress => Ok(()),
            GamePhase::Lobby => Err(DomainError::conflict(
                ConflictKind::GameNotStarted,
                "game has not been started",
            )),
            GamePhase::Finished => Err(DomainError::conflict(
                ConflictKind::GameOver,
                "game is over; no further turns are played",
            )),
        }
    }

    /// Commit a tallied turn, update rotation and record the result.
    fn finish_turn(&mut self, seat: usize, tally: TurnTally) -> Result<TurnResult, DomainError> {
        let game_id = self.id;
        let player = &mut self.players[seat];
        let start = player.stats.remaining;

        let total_score = match tally.kind {
            TurnKind::Bust => 0,
            TurnKind::Scoring | TurnKind::Win => {
                if tally.remaining == 1 && player.profile.is_simulated() {
                    return Err(DomainError::invariant(format!(
                        "{} would be left on 1 after a committed turn",
                        player.profile.name
                    )));
                }
                let scored = start.checked_sub(tally.remaining).ok_or_else(|| {
                    DomainError::invariant(format!(
                        "{} would finish the turn above their starting total",
                        player.profile.name
                    ))
                })?;
                player.stats.remaining = tally.remaining;
                player.stats.total_points += scored;
                player.stats.darts_thrown += tally.dart_scores.len() as u32;
                scored
            }
        };
        player.stats.turns += 1;

        let result = TurnResult {
            kind: tally.kind,
            player_id: player.profile.id,
            player_name: player.profile.name.clone(),
            throws: tally.throws,
            dart_scores: tally.dart_scores,
            total_score,
            remaining: player.stats.remaining,
            three_dart_average: player.stats.three_dart_average(),
        };

        info!(
            game_id = %game_id,
            player = %result.player_name,
            kind = result.kind.as_str(),
            total = result.total_score,
            remaining = result.remaining,
            average = result.three_dart_average,
            "turn finished"
        );

        self.turn += 1;
        match result.kind {
            TurnKind::Win => {
                self.phase = GamePhase::Finished;
                self.winner = Some(seat);
                info!(game_id = %game_id, winner = %result.player_name, "game won");
            }
            // A bust ends the turn like any other: throw passes on, score stays put.
            TurnKind::Scoring | TurnKind::Bust => self.next_player(),
        }

        self.last_turn = Some(result.clone());
        Ok(result)
    }
}

/// Reject submissions no real turn could produce.
pub fn validate_submission(scores: &[u32]) -> Result<(), DomainError> {
    if scores.is_empty() || scores.len() > DARTS_PER_TURN {
        return Err(DomainError::validation(
            ValidationKind::InvalidDartCount,
            format!(
                "a turn has 1 to {DARTS_PER_TURN} darts, got {}",
                scores.len()
            ),
        ));
    }
    if let Some(bad) = scores.iter().find(|&&s| !is_achievable_score(s)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidDartScore,
            format!("no single dart scores {bad}"),
        ));
    }
    Ok(())
}

