// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::board::Target;
use crate::domain::player::ScoringPreference;
use crate::domain::rules::{MAX_CHECKOUT, MIN_CHECKOUT};

/// Any valid board target, miss included.
pub fn target() -> impl Strategy<Value = Target> {
    prop_oneof![
        Just(Target::MISS),
        Just(Target::SINGLE_BULL),
        Just(Target::DOUBLE_BULL),
        (1u8..=20).prop_map(Target::single),
        (1u8..=20).prop_map(Target::double),
        (1u8..=20).prop_map(Target::triple),
    ]
}

pub fn preference() -> impl Strategy<Value = ScoringPreference> {
    prop_oneof![
        Just(ScoringPreference::Twenties),
        Just(ScoringPreference::Nineteens),
    ]
}

/// Remaining score a player can legally be left on.
pub fn playable_score() -> impl Strategy<Value = u32> {
    MIN_CHECKOUT..=1001u32
}

pub fn checkout_range() -> impl Strategy<Value = u32> {
    MIN_CHECKOUT..=MAX_CHECKOUT
}

/// Three-dart averages spanning beginners to professionals, with extremes.
pub fn skill() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0f64..150.0,
        1 => Just(0.0),
        1 => Just(1_000.0),
    ]
}

/// Scatter in millimetres, including zero and wider than the simulator uses.
pub fn dispersion() -> impl Strategy<Value = f64> {
    0.0f64..80.0
}
