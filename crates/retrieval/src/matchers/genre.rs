//! Genre matcher.

use crate::traits::AttributeMatcher;
use catalog::Movie;
use slots::SlotSet;

/// Contribution for a genre hit. Genre is the strongest content signal
/// after an explicit director request.
const GENRE_WEIGHT: u32 = 3;

/// Matches the requested genre against a movie's genre list.
///
/// A movie can carry several genres; any of them matching the requested
/// one counts as a hit.
pub struct GenreMatcher;

impl AttributeMatcher for GenreMatcher {
    fn name(&self) -> &str {
        "GenreMatcher"
    }

    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        match slots.genre {
            Some(wanted) if movie.genres.contains(&wanted) => GENRE_WEIGHT,
            _ => 0,
        }
    }
}
