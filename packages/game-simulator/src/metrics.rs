//! Per-player aggregation across simulated legs.

use dartbuddy::domain::player::three_dart_average;
use serde::Serialize;

use crate::simulator::LegResult;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub skill: Option<f64>,
    pub legs_won: u32,
    /// Mean darts thrown in the legs this player won.
    pub avg_darts_per_won_leg: Option<f64>,
    pub total_points: u32,
    pub darts_thrown: u32,
    pub three_dart_average: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub legs: u32,
    pub abandoned: u32,
    pub starting_score: u32,
    pub seed: Option<u64>,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Default, Clone)]
struct Tally {
    legs_won: u32,
    darts_in_won_legs: u32,
    total_points: u32,
    darts_thrown: u32,
}

/// Fold leg results into one summary row per player, in roster order.
pub fn summarize(
    roster: &[(String, f64)],
    legs: &[LegResult],
    starting_score: u32,
    seed: Option<u64>,
) -> SimulationSummary {
    let mut tallies = vec![Tally::default(); roster.len()];

    // Leg players are in roster order, so namesakes never share a row.
    for leg in legs {
        for (idx, (tally, player)) in tallies.iter_mut().zip(&leg.players).enumerate() {
            tally.total_points += player.total_points;
            tally.darts_thrown += player.darts_thrown;
            if leg.winner == Some(idx) {
                tally.legs_won += 1;
                tally.darts_in_won_legs += player.darts_thrown;
            }
        }
    }

    let players = roster
        .iter()
        .zip(tallies)
        .map(|((name, skill), t)| PlayerSummary {
            name: name.clone(),
            skill: Some(*skill),
            legs_won: t.legs_won,
            avg_darts_per_won_leg: (t.legs_won > 0)
                .then(|| f64::from(t.darts_in_won_legs) / f64::from(t.legs_won)),
            total_points: t.total_points,
            darts_thrown: t.darts_thrown,
            three_dart_average: three_dart_average(t.total_points, t.darts_thrown),
        })
        .collect();

    SimulationSummary {
        legs: legs.len() as u32,
        abandoned: legs.iter().filter(|l| l.winner.is_none()).count() as u32,
        starting_score,
        seed,
        players,
    }
}

pub fn print_summary(summary: &SimulationSummary) {
    println!("\n=== Simulation Summary ===");
    println!(
        "Legs played: {} (from {}){}",
        summary.legs,
        summary.starting_score,
        summary
            .seed
            .map(|s| format!(", seed {s}"))
            .unwrap_or_default()
    );
    if summary.abandoned > 0 {
        println!("Abandoned at turn cap: {}", summary.abandoned);
    }
    println!(
        "{:<16} {:>6} {:>9} {:>14} {:>8}",
        "Player", "Skill", "Legs won", "Darts/won leg", "3DA"
    );
    for p in &summary.players {
        let darts = p
            .avg_darts_per_won_leg
            .map(|d| format!("{d:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:>6.1} {:>9} {:>14} {:>8.2}",
            p.name,
            p.skill.unwrap_or_default(),
            p.legs_won,
            darts,
            p.three_dart_average
        );
    }
}
