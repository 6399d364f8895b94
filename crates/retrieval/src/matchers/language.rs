//! Language matcher.

use crate::traits::AttributeMatcher;
use catalog::Movie;
use slots::SlotSet;

const LANGUAGE_WEIGHT: u32 = 2;

/// Matches the requested language against the movie's language.
pub struct LanguageMatcher;

impl AttributeMatcher for LanguageMatcher {
    fn name(&self) -> &str {
        "LanguageMatcher"
    }

    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        match slots.language {
            Some(wanted) if movie.language == wanted => LANGUAGE_WEIGHT,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, Language, Mood};

    fn test_movie(language: Language) -> Movie {
        Movie {
            title: "Test".to_string(),
            year: 2019,
            genres: vec![Genre::Drama],
            mood: Mood::Serious,
            director: "Someone".to_string(),
            language,
            runtime_minutes: 130,
        }
    }

    #[test]
    fn test_matching_language_scores() {
        let slots = SlotSet {
            language: Some(Language::Korean),
            ..SlotSet::empty()
        };
        assert_eq!(
            LanguageMatcher.score(&test_movie(Language::Korean), &slots),
            LANGUAGE_WEIGHT
        );
        assert_eq!(LanguageMatcher.score(&test_movie(Language::English), &slots), 0);
    }

    #[test]
    fn test_absent_slot_scores_zero() {
        assert_eq!(
            LanguageMatcher.score(&test_movie(Language::French), &SlotSet::empty()),
            0
        );
    }
}
