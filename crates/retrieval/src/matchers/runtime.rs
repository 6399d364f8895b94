//! Runtime matcher.

use crate::traits::AttributeMatcher;
use catalog::Movie;
use slots::{RuntimeBucket, SlotSet};

/// Runtime is the weakest preference signal, barely a tie-breaker.
const RUNTIME_WEIGHT: u32 = 1;

/// Matches the requested runtime bucket against the movie's bucketed
/// runtime.
pub struct RuntimeMatcher;

impl AttributeMatcher for RuntimeMatcher {
    fn name(&self) -> &str {
        "RuntimeMatcher"
    }

    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        match slots.runtime {
            Some(wanted) if RuntimeBucket::of_minutes(movie.runtime_minutes) == wanted => {
                RUNTIME_WEIGHT
            }
            _ => 0,
        }
    }
}
