//! Release-era matcher.
//!
//! The only matcher with two weight tiers: an exact year hit scores
//! higher than landing in the right decade or qualitative bucket.

use crate::traits::AttributeMatcher;
use catalog::Movie;
use slots::{Era, SlotSet};

/// Exact year requested and matched
const EXACT_YEAR_WEIGHT: u32 = 3;
/// Same decade, or matching a decade/classic/recent request
const ERA_WEIGHT: u32 = 2;

/// Matches the requested era against a movie's release year.
pub struct EraMatcher;

impl AttributeMatcher for EraMatcher {
    fn name(&self) -> &str {
        "EraMatcher"
    }

    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        let Some(era) = slots.era else {
            return 0;
        };
        match era {
            Era::Year(year) => {
                if movie.year == year {
                    EXACT_YEAR_WEIGHT
                } else if movie.decade() == year / 10 * 10 {
                    // Near miss: right decade still counts
                    ERA_WEIGHT
                } else {
                    0
                }
            }
            Era::Decade(decade) => {
                if movie.decade() == decade {
                    ERA_WEIGHT
                } else {
                    0
                }
            }
            Era::Classic => {
                if movie.year < Era::CLASSIC_BEFORE {
                    ERA_WEIGHT
                } else {
                    0
                }
            }
            Era::Recent => {
                if movie.year >= Era::RECENT_FROM {
                    ERA_WEIGHT
                } else {
                    0
                }
            }
        }
    }
}
