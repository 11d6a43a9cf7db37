//! Deterministic throwers for tests and demos.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::RngCore;

use crate::domain::board::Target;
use crate::domain::throw_sim::{DartThrower, ThrowOutcome};

/// Replays a fixed list of hits regardless of what was aimed at.
///
/// Once the script runs out every dart misses. Aimed targets are recorded in
/// a shared log so callers can check what the chart asked for.
#[derive(Debug, Default)]
pub struct ScriptedThrower {
    hits: VecDeque<Target>,
    aims: Arc<Mutex<Vec<Target>>>,
}

impl ScriptedThrower {
    pub fn new(hits: impl IntoIterator<Item = Target>) -> Self {
        Self {
            hits: hits.into_iter().collect(),
            aims: Arc::default(),
        }
    }

    /// Shared handle to the aim log; stays readable after the thrower is boxed.
    pub fn aim_log(&self) -> Arc<Mutex<Vec<Target>>> {
        Arc::clone(&self.aims)
    }
}

impl DartThrower for ScriptedThrower {
    fn throw(&mut self, target: Target, _dispersion: f64) -> ThrowOutcome {
        self.aims.lock().push(target);
        ThrowOutcome::new(self.hits.pop_front().unwrap_or(Target::MISS))
    }
}

/// Hits exactly what it aims at.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerfectThrower;

impl DartThrower for PerfectThrower {
    fn throw(&mut self, target: Target, _dispersion: f64) -> ThrowOutcome {
        ThrowOutcome::new(target)
    }
}

/// Random source whose standard normal samples are all exactly zero.
///
/// The ziggurat sampler maps a word with only the top bit set to the middle
/// of its first layer, so a `ThrowSimulator` driven by this lands every dart
/// on its aim point at any dispersion.
#[derive(Debug, Default, Clone, Copy)]
pub struct CentredRng;

impl CentredRng {
    const WORD: u64 = 1 << 63;
}

impl RngCore for CentredRng {
    fn next_u32(&mut self) -> u32 {
        (Self::WORD >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Self::WORD
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            chunk.copy_from_slice(&Self::WORD.to_le_bytes()[..chunk.len()]);
        }
    }
}
