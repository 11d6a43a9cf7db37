//! RNG seed derivation for reproducible multi-game runs.
//!
//! A batch of simulated games shares one base seed; each game gets its own
//! stream so that games differ from each other but rerun identically.

/// Derive the throw-simulator seed for game `game_no` of a batch.
pub fn derive_simulator_seed(base_seed: u64, game_no: u32) -> u64 {
    // Distinct multiplier and offset keep game 0 off the bare base seed.
    base_seed
        .wrapping_add(u64::from(game_no).wrapping_mul(1_000_003))
        .wrapping_add(7)
}
