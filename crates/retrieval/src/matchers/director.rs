//! Director matcher.

use crate::traits::AttributeMatcher;
use catalog::Movie;
use slots::SlotSet;

/// An explicit director request is the strongest signal of all.
const DIRECTOR_WEIGHT: u32 = 4;

/// Exact (case-insensitive) director name match.
pub struct DirectorMatcher;

impl AttributeMatcher for DirectorMatcher {
    fn name(&self) -> &str {
        "DirectorMatcher"
    }

    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        match &slots.director {
            Some(wanted) if movie.director.eq_ignore_ascii_case(wanted) => DIRECTOR_WEIGHT,
            _ => 0,
        }
    }
}
