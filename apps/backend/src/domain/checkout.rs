//! Checkout chart: the standard finishing sequence for every remaining
//! score from 2 to 170, plus the fallback aim when no finish is charted.

use crate::domain::board::Target;
use crate::domain::player::ScoringPreference;
use crate::domain::rules::{MAX_CHECKOUT, MIN_CHECKOUT};
use crate::errors::domain::DomainError;

/// Scores in `MIN_CHECKOUT..=MAX_CHECKOUT` with no three-dart finish.
pub const NO_CHECKOUT: [u32; 7] = [159, 162, 163, 165, 166, 168, 169];

const fn s(number: u8) -> Target {
    Target::single(number)
}

const fn d(number: u8) -> Target {
    Target::double(number)
}

const fn t(number: u8) -> Target {
    Target::triple(number)
}

const OUTER: Target = Target::SINGLE_BULL;
const BULL: Target = Target::DOUBLE_BULL;

/// Remaining score -> recommended darts, ascending by score.
static CHECKOUT_TABLE: &[(u32, &[Target])] = &[
    // Single doubles and one-dart setups
    (2, &[d(1)]),
    (3, &[s(1), d(1)]),
    (4, &[d(2)]),
    (5, &[s(1), d(2)]),
    (6, &[d(3)]),
    (7, &[s(3), d(2)]),
    (8, &[d(4)]),
    (9, &[s(1), d(4)]),
    (10, &[d(5)]),
    (11, &[s(3), d(4)]),
    (12, &[d(6)]),
    (13, &[s(5), d(4)]),
    (14, &[d(7)]),
    (15, &[s(7), d(4)]),
    (16, &[d(8)]),
    (17, &[s(9), d(4)]),
    (18, &[d(9)]),
    (19, &[s(3), d(8)]),
    (20, &[d(10)]),
    (21, &[s(5), d(8)]),
    (22, &[d(11)]),
    (23, &[s(7), d(8)]),
    (24, &[d(12)]),
    (25, &[s(9), d(8)]),
    (26, &[d(13)]),
    (27, &[s(11), d(8)]),
    (28, &[d(14)]),
    (29, &[s(13), d(8)]),
    (30, &[d(15)]),
    (31, &[s(15), d(8)]),
    (32, &[d(16)]),
    (33, &[s(17), d(8)]),
    (34, &[d(17)]),
    (35, &[s(3), d(16)]),
    (36, &[d(18)]),
    (37, &[s(5), d(16)]),
    (38, &[d(19)]),
    (39, &[s(7), d(16)]),
    (40, &[d(20)]),

    // Two darts: single then double
    (41, &[s(9), d(16)]),
    (42, &[s(10), d(16)]),
    (43, &[s(11), d(16)]),
    (44, &[s(12), d(16)]),
    (45, &[s(13), d(16)]),
    (46, &[s(6), d(20)]),
    (47, &[s(7), d(20)]),
    (48, &[s(8), d(20)]),
    (49, &[s(17), d(16)]),
    (50, &[s(18), d(16)]),
    (51, &[s(19), d(16)]),
    (52, &[s(12), d(20)]),
    (53, &[s(13), d(20)]),
    (54, &[s(14), d(20)]),
    (55, &[s(15), d(20)]),
    (56, &[s(16), d(20)]),
    (57, &[s(17), d(20)]),
    (58, &[s(18), d(20)]),
    (59, &[s(19), d(20)]),
    (60, &[s(20), d(20)]),

    // Two darts: treble then double
    (61, &[t(15), d(8)]),
    (62, &[t(10), d(16)]),
    (63, &[t(13), d(12)]),
    (64, &[t(16), d(8)]),
    (65, &[t(19), d(4)]),
    (66, &[t(10), d(18)]),
    (67, &[t(17), d(8)]),
    (68, &[t(20), d(4)]),
    (69, &[t(15), d(12)]),
    (70, &[t(10), d(20)]),
    (71, &[t(13), d(16)]),
    (72, &[t(16), d(12)]),
    (73, &[t(19), d(8)]),
    (74, &[t(14), d(16)]),
    (75, &[t(17), d(12)]),
    (76, &[t(20), d(8)]),
    (77, &[t(19), d(10)]),
    (78, &[t(18), d(12)]),
    (79, &[t(19), d(11)]),
    (80, &[t(20), d(10)]),
    (81, &[t(19), d(12)]),
    (82, &[t(14), d(20)]),
    (83, &[t(17), d(16)]),
    (84, &[t(20), d(12)]),
    (85, &[t(15), d(20)]),
    (86, &[t(18), d(16)]),
    (87, &[t(17), d(18)]),
    (88, &[t(16), d(20)]),
    (89, &[t(19), d(16)]),
    (90, &[t(20), d(15)]),
    (91, &[t(17), d(20)]),
    (92, &[t(20), d(16)]),
    (93, &[t(19), d(18)]),
    (94, &[t(18), d(20)]),
    (95, &[t(19), d(19)]),
    (96, &[t(20), d(18)]),
    (97, &[t(19), d(20)]),
    (98, &[t(20), d(19)]),

    // Three darts
    (99, &[t(19), s(10), d(16)]),
    (100, &[t(20), d(20)]),
    (101, &[t(20), s(1), d(20)]),
    (102, &[t(20), s(10), d(16)]),
    (103, &[t(20), s(3), d(20)]),
    (104, &[t(18), s(18), d(16)]),
    (105, &[t(19), s(16), d(16)]),
    (106, &[t(20), s(14), d(16)]),
    (107, &[t(19), s(18), d(16)]),
    (108, &[t(20), s(16), d(16)]),
    (109, &[t(19), s(20), d(16)]),
    (110, &[t(20), s(18), d(16)]),
    (111, &[t(20), s(19), d(16)]),
    (112, &[t(20), s(12), d(20)]),
    (113, &[t(20), s(13), d(20)]),
    (114, &[t(20), s(14), d(20)]),
    (115, &[t(20), s(15), d(20)]),
    (116, &[t(20), s(16), d(20)]),
    (117, &[t(20), s(17), d(20)]),
    (118, &[t(20), s(18), d(20)]),
    (119, &[t(19), t(10), d(16)]),
    (120, &[t(20), s(20), d(20)]),
    (121, &[t(17), t(10), d(20)]),
    (122, &[t(18), t(20), d(4)]),
    (123, &[t(19), t(16), d(9)]),
    (124, &[t(20), t(16), d(8)]),
    (125, &[OUTER, t(20), d(20)]),
    (126, &[t(19), t(19), d(6)]),
    (127, &[t(20), t(17), d(8)]),
    (128, &[t(18), t(14), d(16)]),
    (129, &[t(19), t(16), d(12)]),
    (130, &[t(20), t(20), d(5)]),

    // Big finishes: treble, treble, double (or bull)
    (131, &[t(20), t(13), d(16)]),
    (132, &[t(20), t(16), d(12)]),
    (133, &[t(20), t(19), d(8)]),
    (134, &[t(20), t(14), d(16)]),
    (135, &[t(20), t(17), d(12)]),
    (136, &[t(20), t(20), d(8)]),
    (137, &[t(19), t(16), d(16)]),
    (138, &[t(20), t(18), d(12)]),
    (139, &[t(19), t(14), d(20)]),
    (140, &[t(20), t(16), d(16)]),
    (141, &[t(20), t(19), d(12)]),
    (142, &[t(20), t(14), d(20)]),
    (143, &[t(20), t(17), d(16)]),
    (144, &[t(20), t(20), d(12)]),
    (145, &[t(20), t(15), d(20)]),
    (146, &[t(20), t(18), d(16)]),
    (147, &[t(20), t(17), d(18)]),
    (148, &[t(20), t(16), d(20)]),
    (149, &[t(20), t(19), d(16)]),
    (150, &[t(20), t(18), d(18)]),
    (151, &[t(20), t(17), d(20)]),
    (152, &[t(20), t(20), d(16)]),
    (153, &[t(20), t(19), d(18)]),
    (154, &[t(20), t(18), d(20)]),
    (155, &[t(20), t(19), d(19)]),
    (156, &[t(20), t(20), d(18)]),
    (157, &[t(20), t(19), d(20)]),
    (158, &[t(20), t(20), d(19)]),
    // 159 has no three-dart finish
    (160, &[t(20), t(20), d(20)]),
    (161, &[t(20), t(17), BULL]),
    // 162, 163 have no three-dart finish
    (164, &[t(20), t(18), BULL]),
    // 165, 166 have no three-dart finish
    (167, &[t(20), t(19), BULL]),
    // 168, 169 have no three-dart finish
    (170, &[t(20), t(20), BULL]),
];

/// Immutable lookup over [`CHECKOUT_TABLE`], indexed by remaining score.
#[derive(Debug, Clone)]
pub struct CheckoutChart {
    finishes: Vec<Option<&'static [Target]>>,
}

impl Default for CheckoutChart {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutChart {
    pub fn new() -> Self {
        let mut finishes = vec![None; MAX_CHECKOUT as usize + 1];
        for &(score, darts) in CHECKOUT_TABLE {
            finishes[score as usize] = Some(darts);
        }
        Self { finishes }
    }

    /// Charted finish for `score`, if there is one.
    pub fn lookup(&self, score: u32) -> Option<&'static [Target]> {
        self.finishes.get(score as usize).copied().flatten()
    }

    /// What to aim at next with `score` remaining.
    ///
    /// The first dart of the charted finish, or the preferred treble when the
    /// score has no finish. A score below two cannot be played from and
    /// signals broken turn bookkeeping upstream.
    pub fn next_target(
        &self,
        score: u32,
        preference: ScoringPreference,
    ) -> Result<Target, DomainError> {
        if score < MIN_CHECKOUT {
            return Err(DomainError::invariant(format!(
                "asked for a target with {score} remaining; no dart can be thrown from below {MIN_CHECKOUT}"
            )));
        }
        Ok(self
            .lookup(score)
            .and_then(|darts| darts.first().copied())
            .unwrap_or_else(|| preference.scoring_target()))
    }
}
