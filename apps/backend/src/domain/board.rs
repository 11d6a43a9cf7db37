//! Dartboard geometry: the clockwise sector layout, ring radii and the
//! scoring targets a dart can strike.
//!
//! Angles are measured in radians clockwise from the top of the board, so a
//! point at polar `(r, θ)` sits at Cartesian `(r·sin θ, r·cos θ)`.

use std::f64::consts::PI;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::rules::MAX_DART_SCORE;

/// Number used for both bull rings.
pub const BULLSEYE: u8 = 25;

pub const SECTOR_COUNT: usize = 20;

/// Angular width of one numbered sector.
pub const SECTOR_WIDTH: f64 = 2.0 * PI / SECTOR_COUNT as f64;

/// Sector numbers clockwise from the top (20 at 12 o'clock).
pub const SECTOR_ORDER: [u8; SECTOR_COUNT] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

// Standard board radii in millimetres, strictly increasing.
pub const DOUBLE_BULL_RADIUS: f64 = 6.35;
pub const SINGLE_BULL_RADIUS: f64 = 15.9;
pub const TRIPLE_INNER_RADIUS: f64 = 99.0;
pub const TRIPLE_OUTER_RADIUS: f64 = 107.0;
pub const DOUBLE_INNER_RADIUS: f64 = 162.0;
pub const DOUBLE_OUTER_RADIUS: f64 = 170.0;
/// Anything further from the centre is off the board.
pub const BOARD_RADIUS: f64 = DOUBLE_OUTER_RADIUS;

/// Scoring ring; the discriminant order matches the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    Miss,
    Single,
    Double,
    Triple,
}

impl Ring {
    pub const fn multiplier(self) -> u32 {
        match self {
            Ring::Miss => 0,
            Ring::Single => 1,
            Ring::Double => 2,
            Ring::Triple => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Ring::Miss => "miss",
            Ring::Single => "single",
            Ring::Double => "double",
            Ring::Triple => "triple",
        }
    }

    const fn prefix(self) -> char {
        match self {
            Ring::Miss => '-',
            Ring::Single => 'S',
            Ring::Double => 'D',
            Ring::Triple => 'T',
        }
    }
}

/// A ring plus a number: something to aim at, or something that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub ring: Ring,
    pub number: u8,
}

impl Target {
    pub const MISS: Target = Target {
        ring: Ring::Miss,
        number: 0,
    };
    pub const SINGLE_BULL: Target = Target::single(BULLSEYE);
    pub const DOUBLE_BULL: Target = Target::double(BULLSEYE);

    pub const fn single(number: u8) -> Self {
        Self {
            ring: Ring::Single,
            number,
        }
    }

    pub const fn double(number: u8) -> Self {
        Self {
            ring: Ring::Double,
            number,
        }
    }

    pub const fn triple(number: u8) -> Self {
        Self {
            ring: Ring::Triple,
            number,
        }
    }

    pub const fn is_bull(self) -> bool {
        self.number == BULLSEYE
    }

    /// True for any double ring, including the double bull.
    pub const fn is_double(self) -> bool {
        matches!(self.ring, Ring::Double)
    }

    /// Whether this ring/number combination exists on a real board.
    pub const fn is_valid(self) -> bool {
        match self.ring {
            Ring::Miss => self.number == 0,
            Ring::Triple => self.number >= 1 && self.number <= 20,
            Ring::Single | Ring::Double => {
                (self.number >= 1 && self.number <= 20) || self.number == BULLSEYE
            }
        }
    }

    /// Points for a clean hit. Bulls score 25/50; invalid combinations score 0.
    pub const fn score(self) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        self.number as u32 * self.ring.multiplier()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ring {
            Ring::Miss => write!(f, "MISS"),
            ring => write!(f, "{}{}", ring.prefix(), self.number),
        }
    }
}

/// Every score a single dart can produce.
pub fn is_achievable_score(score: u32) -> bool {
    score <= 20
        || score == 25
        || score == 50
        || (score <= 40 && score % 2 == 0)
        || (score <= MAX_DART_SCORE && score % 3 == 0)
}

/// Derived angle table for the numbered sectors.
#[derive(Debug, Clone)]
pub struct BoardGeometry {
    /// Indexed by board number; index 0 and the bull stay at 0.0.
    angles: [f64; BULLSEYE as usize + 1],
}

static STANDARD: Lazy<BoardGeometry> = Lazy::new(BoardGeometry::build);

impl BoardGeometry {
    /// Shared read-only geometry of a standard board.
    pub fn standard() -> &'static BoardGeometry {
        &STANDARD
    }

    fn build() -> Self {
        let mut angles = [0.0; BULLSEYE as usize + 1];
        for (i, &number) in SECTOR_ORDER.iter().enumerate() {
            angles[number as usize] = i as f64 * SECTOR_WIDTH;
        }
        Self { angles }
    }

    /// Centre angle of a numbered sector. The bull and unknown numbers map to 0.
    pub fn angle(&self, number: u8) -> f64 {
        self.angles.get(number as usize).copied().unwrap_or(0.0)
    }

    /// Sector whose centre is nearest to `angle`.
    pub fn number_at(&self, angle: f64) -> u8 {
        let normalized = angle.rem_euclid(2.0 * PI);
        let index = (normalized / SECTOR_WIDTH).round() as usize % SECTOR_COUNT;
        SECTOR_ORDER[index]
    }

    /// Cartesian point a thrower aims for when going at `target`.
    ///
    /// Bull targets aim at the centre. Singles aim between the triple and
    /// double rings, the largest single-scoring area.
    pub fn aim_point(&self, target: Target) -> (f64, f64) {
        if target.is_bull() {
            return (0.0, 0.0);
        }
        let radius = match target.ring {
            Ring::Double => (DOUBLE_INNER_RADIUS + DOUBLE_OUTER_RADIUS) / 2.0,
            Ring::Single => (TRIPLE_OUTER_RADIUS + DOUBLE_INNER_RADIUS) / 2.0,
            Ring::Triple | Ring::Miss => (TRIPLE_INNER_RADIUS + TRIPLE_OUTER_RADIUS) / 2.0,
        };
        let angle = self.angle(target.number);
        (radius * angle.sin(), radius * angle.cos())
    }

    /// What a dart landing at polar `(radius, angle)` struck.
    pub fn classify(&self, radius: f64, angle: f64) -> Target {
        if radius <= DOUBLE_BULL_RADIUS {
            return Target::DOUBLE_BULL;
        }
        if radius <= SINGLE_BULL_RADIUS {
            return Target::SINGLE_BULL;
        }
        if radius > BOARD_RADIUS {
            return Target::MISS;
        }

        let number = self.number_at(angle);
        let ring = if radius >= DOUBLE_INNER_RADIUS {
            Ring::Double
        } else if (TRIPLE_INNER_RADIUS..=TRIPLE_OUTER_RADIUS).contains(&radius) {
            Ring::Triple
        } else {
            Ring::Single
        };
        Target { ring, number }
    }

    /// Classify a Cartesian landing point.
    pub fn classify_point(&self, x: f64, y: f64) -> Target {
        self.classify(x.hypot(y), x.atan2(y))
    }
}
