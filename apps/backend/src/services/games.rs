//! In-memory registry of live game sessions.
//!
//! One coarse lock guards the id -> session map; each session has its own
//! mutex so turns in different games never contend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::game::{GamePhase, GameSession, PlayerHandle};
use crate::domain::player::PlayerProfile;
use crate::domain::rules::SubmissionPolicy;
use crate::domain::seed_derivation::derive_simulator_seed;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::turn::TurnResult;
use crate::errors::domain::{DomainError, NotFoundKind};

type SharedSession = Arc<Mutex<GameSession>>;

/// What a simulated-turn request produced.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// `None` when a real player is up and nothing was thrown.
    pub result: Option<TurnResult>,
    pub state: GameSnapshot,
}

pub struct GameRegistry {
    games: RwLock<HashMap<Uuid, SharedSession>>,
    default_start: u32,
    policy: SubmissionPolicy,
    base_seed: Option<u64>,
    created: AtomicU32,
}

impl GameRegistry {
    pub fn new(default_start: u32, policy: SubmissionPolicy, base_seed: Option<u64>) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            default_start,
            policy,
            base_seed,
            created: AtomicU32::new(0),
        }
    }

    /// Open a new game in the lobby.
    pub fn create_game(
        &self,
        starting_score: Option<u32>,
        policy: Option<SubmissionPolicy>,
    ) -> Result<GameSnapshot, DomainError> {
        let start = starting_score.unwrap_or(self.default_start);
        let game_no = self.created.fetch_add(1, Ordering::Relaxed);
        let session = match self.base_seed {
            Some(base) => GameSession::seeded(start, derive_simulator_seed(base, game_no))?,
            None => GameSession::new(start)?,
        }
        .with_policy(policy.unwrap_or(self.policy));

        let snapshot = session.snapshot();
        info!(
            game_id = %snapshot.game_id,
            starting_score = start,
            policy = snapshot.submission_policy.as_str(),
            "game created"
        );
        self.insert(session);
        Ok(snapshot)
    }

    /// Register an already-built session, e.g. one with an injected thrower.
    pub fn insert(&self, session: GameSession) -> Uuid {
        let id = session.id();
        self.games.write().insert(id, Arc::new(Mutex::new(session)));
        id
    }

    pub fn add_player(
        &self,
        game_id: Uuid,
        profile: PlayerProfile,
    ) -> Result<PlayerHandle, DomainError> {
        let session = self.session(game_id)?;
        let mut game = session.lock();
        game.add_player(profile)
    }

    pub fn start(&self, game_id: Uuid) -> Result<GameSnapshot, DomainError> {
        let session = self.session(game_id)?;
        let mut game = session.lock();
        game.start()?;
        Ok(game.snapshot())
    }

    /// Play the current player's turn, starting a lobby game first.
    pub fn play_turn(&self, game_id: Uuid) -> Result<TurnOutcome, DomainError> {
        let session = self.session(game_id)?;
        let mut game = session.lock();
        if game.phase() == GamePhase::Lobby {
            game.start()?;
        }
        let result = game.play_turn()?;
        Ok(TurnOutcome {
            result,
            state: game.snapshot(),
        })
    }

    /// Apply a real player's reported darts.
    pub fn submit_score(
        &self,
        game_id: Uuid,
        scores: &[u32],
    ) -> Result<(TurnResult, GameSnapshot), DomainError> {
        let session = self.session(game_id)?;
        let mut game = session.lock();
        match game.submit_score(scores) {
            Ok(result) => Ok((result, game.snapshot())),
            Err(err) => {
                warn!(game_id = %game_id, ?scores, error = %err, "score submission rejected");
                Err(err)
            }
        }
    }

    pub fn get_state(&self, game_id: Uuid) -> Result<GameSnapshot, DomainError> {
        let session = self.session(game_id)?;
        let game = session.lock();
        Ok(game.snapshot())
    }

    pub fn contains(&self, game_id: Uuid) -> bool {
        self.games.read().contains_key(&game_id)
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// Clone the session handle out so the registry lock is released before the game is locked.
    fn session(&self, game_id: Uuid) -> Result<SharedSession, DomainError> {
        self.games.read().get(&game_id).cloned().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
        })
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(
            crate::domain::rules::DEFAULT_STARTING_SCORE,
            SubmissionPolicy::default(),
            None,
        )
    }
}
