//! Plays whole legs in memory with the backend's game engine.

use std::str::FromStr;

use dartbuddy::domain::fixtures::PerfectThrower;
use dartbuddy::domain::game::GameSession;
use dartbuddy::domain::player::{PlayerProfile, ScoringPreference};
use dartbuddy::domain::seed_derivation::derive_simulator_seed;
use dartbuddy::domain::snapshot::PlayerSnapshot;
use dartbuddy::domain::throw_sim::{DartThrower, ThrowSimulator};
use dartbuddy::domain::turn::TurnKind;
use dartbuddy::DomainError;
use tracing::{debug, info, warn};

/// One `--player` argument: `NAME:SKILL[:twenties|nineteens]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSpec {
    pub name: String,
    pub skill: f64,
    pub preference: ScoringPreference,
}

impl PlayerSpec {
    pub fn new(name: &str, skill: f64) -> Self {
        Self {
            name: name.to_string(),
            skill,
            preference: ScoringPreference::default(),
        }
    }

    fn profile(&self) -> PlayerProfile {
        PlayerProfile::simulated(self.name.clone(), self.skill, self.preference)
    }
}

impl FromStr for PlayerSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(format!("'{s}': player name is empty"));
        }
        let skill = parts
            .next()
            .ok_or_else(|| format!("'{s}': expected NAME:SKILL[:PREFERENCE]"))?
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("'{s}': bad skill: {e}"))?;
        if !skill.is_finite() || skill < 0.0 {
            return Err(format!("'{s}': skill must be a non-negative number"));
        }
        let preference = match parts.next() {
            Some(raw) => ScoringPreference::from_str(raw).map_err(|e| e.to_string())?,
            None => ScoringPreference::default(),
        };
        if parts.next().is_some() {
            return Err(format!("'{s}': too many ':' separated fields"));
        }
        Ok(Self {
            name: name.to_string(),
            skill,
            preference,
        })
    }
}

/// How a leg's darts are produced.
#[derive(Debug, Clone, Copy)]
pub enum ThrowMode {
    /// Gaussian scatter; reproducible when seeded.
    Random { seed: Option<u64> },
    /// Every dart hits its target.
    Perfect,
}

#[derive(Debug, Clone)]
pub struct LegResult {
    pub leg_no: u32,
    /// Roster index of the winner; `None` when the turn cap was reached first.
    pub winner: Option<usize>,
    pub turns: u32,
    /// Final state of each player, in roster order (not seat order).
    pub players: Vec<PlayerSnapshot>,
}

impl LegResult {
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|idx| self.players.get(idx))
            .map(|p| p.name.as_str())
    }
}

pub struct Simulator {
    start: u32,
    roster: Vec<PlayerSpec>,
    mode: ThrowMode,
    max_turns: u32,
}

impl Simulator {
    pub fn new(start: u32, roster: Vec<PlayerSpec>, mode: ThrowMode, max_turns: u32) -> Self {
        Self {
            start,
            roster,
            mode,
            max_turns,
        }
    }

    fn thrower(&self, leg_no: u32) -> Box<dyn DartThrower> {
        match self.mode {
            ThrowMode::Random { seed } => Box::new(ThrowSimulator::new(
                seed.map(|s| derive_simulator_seed(s, leg_no)),
            )),
            ThrowMode::Perfect => Box::new(PerfectThrower),
        }
    }

    /// Play one leg to a checkout. The throw-off rotates so each player opens in turn.
    pub fn play_leg(&self, leg_no: u32) -> Result<LegResult, DomainError> {
        let mut game = GameSession::with_thrower(self.start, self.thrower(leg_no))?;
        let count = self.roster.len();
        let opener = leg_no as usize % count.max(1);
        // seats[seat] is the roster index sitting there.
        let seats: Vec<usize> = (0..count).map(|seat| (opener + seat) % count).collect();
        for &idx in &seats {
            game.add_player(self.roster[idx].profile())?;
        }
        game.start()?;
        info!(leg = leg_no, start = self.start, "leg started");

        let mut winner = None;
        while game.turn() < self.max_turns {
            let Some(result) = game.play_turn()? else {
                // Only simulated players are seated.
                return Err(DomainError::invariant("simulated leg reached a real player"));
            };
            debug!(
                leg = leg_no,
                player = %result.player_name,
                kind = result.kind.as_str(),
                scored = result.total_score,
                remaining = result.remaining,
                "turn"
            );
            if result.kind == TurnKind::Win {
                info!(leg = leg_no, winner = %result.player_name, turns = game.turn(), "leg won");
                // The winner keeps the throw, so the current seat is theirs.
                winner = game.current_seat().map(|seat| seats[seat]);
                break;
            }
        }
        if winner.is_none() {
            warn!(leg = leg_no, max_turns = self.max_turns, "leg abandoned at turn cap");
        }

        let mut seated: Vec<(usize, PlayerSnapshot)> =
            seats.into_iter().zip(game.snapshot().players).collect();
        seated.sort_by_key(|(idx, _)| *idx);

        Ok(LegResult {
            leg_no,
            winner,
            turns: game.turn(),
            players: seated.into_iter().map(|(_, p)| p).collect(),
        })
    }
}
