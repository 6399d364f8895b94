//! Mood matcher.

use crate::traits::AttributeMatcher;
use catalog::Movie;
use slots::SlotSet;

const MOOD_WEIGHT: u32 = 2;

/// Matches the requested mood against the movie's mood tag.
pub struct MoodMatcher;

impl AttributeMatcher for MoodMatcher {
    fn name(&self) -> &str {
        "MoodMatcher"
    }

    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        match slots.mood {
            Some(wanted) if movie.mood == wanted => MOOD_WEIGHT,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, Language, Mood};

    fn test_movie(mood: Mood) -> Movie {
        Movie {
            title: "Test".to_string(),
            year: 2000,
            genres: vec![Genre::Comedy],
            mood,
            director: "Someone".to_string(),
            language: Language::English,
            runtime_minutes: 100,
        }
    }

    #[test]
    fn test_matching_mood_scores() {
        let slots = SlotSet {
            mood: Some(Mood::Fun),
            ..SlotSet::empty()
        };
        assert_eq!(MoodMatcher.score(&test_movie(Mood::Fun), &slots), MOOD_WEIGHT);
        assert_eq!(MoodMatcher.score(&test_movie(Mood::Serious), &slots), 0);
    }

    #[test]
    fn test_absent_slot_scores_zero() {
        assert_eq!(MoodMatcher.score(&test_movie(Mood::Fun), &SlotSet::empty()), 0);
    }
}
