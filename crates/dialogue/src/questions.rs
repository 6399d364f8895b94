//! Clarifying-question generation.
//!
//! Maps a missing slot to one natural-language question. Templates are
//! fixed; two context-sensitive variants exist:
//!
//! - genre missing while a director is known: disambiguate within that
//!   director's catalog entries instead of asking generically
//! - mood missing while the genre is Action: the gritty-vs-blockbuster
//!   phrasing
//!
//! The match over `Slot` is exhaustive, so every valid missing-slot
//! identifier produces a non-empty question by construction.

use catalog::{Catalog, Genre};
use slots::{Slot, SlotSet};
use std::sync::Arc;

/// One clarifying question, plus the slot it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarifyingQuestion {
    pub slot: Slot,
    pub text: String,
}

/// Generates clarifying questions from the fixed template table.
///
/// Holds the catalog so director-specific questions can reference real
/// entries ("more mind-bending like Inception or serious like The Dark
/// Knight?").
pub struct QuestionGenerator {
    catalog: Arc<Catalog>,
}

impl QuestionGenerator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Produce the question for a missing slot, given the slots already
    /// filled (for context-sensitive phrasing).
    pub fn question_for(&self, missing: Slot, slots: &SlotSet) -> ClarifyingQuestion {
        let text = match missing {
            Slot::Genre => self.genre_question(slots),
            Slot::Mood => mood_question(slots),
            Slot::Era => {
                "Any preference for release era - classic, 1990s, 2000s, 2010s, or recent?"
                    .to_string()
            }
            Slot::Director => {
                "Do you prefer a specific director or filmmaker? If yes, name them (e.g., Nolan)."
                    .to_string()
            }
            Slot::Language => {
                "Do you have a preferred language? (e.g., English, Korean, French)".to_string()
            }
            Slot::Runtime => {
                "Do you prefer a short (under 100 min), medium (100-140 min), or long (over 140 min) movie?"
                    .to_string()
            }
        };
        ClarifyingQuestion {
            slot: missing,
            text,
        }
    }

    /// Genre question, specialized when a director is already known.
    fn genre_question(&self, slots: &SlotSet) -> String {
        if let Some(director) = &slots.director {
            let films = self.catalog.movies_by_director(director);
            if films.len() >= 2 {
                return format!(
                    "{}'s films are fantastic! To narrow it down, are you in the mood for something {} like {} or something more {} like {}?",
                    director,
                    films[0].mood,
                    films[0].title,
                    films[1].mood,
                    films[1].title
                );
            }
            if let Some(film) = films.first() {
                return format!(
                    "{} directed {} ({}) in our catalog. Does a {} {} film sound right, or would you like a different genre?",
                    director,
                    film.title,
                    film.year,
                    film.mood,
                    film.genres[0]
                );
            }
        }
        "Sure - what genre are you in the mood for? (e.g., Action, Drama, Comedy, Romance)"
            .to_string()
    }
}

/// Mood question, with the action-specific variant.
fn mood_question(slots: &SlotSet) -> String {
    if slots.genre == Some(Genre::Action) {
        return "Great - for action, do you want something gritty and realistic or a fun blockbuster?"
            .to_string();
    }
    "Would you like something more light and fun or more serious and intense?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> QuestionGenerator {
        QuestionGenerator::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_every_slot_has_a_nonempty_question() {
        let gen = generator();
        let slots = SlotSet::empty();
        for slot in Slot::ALL {
            let question = gen.question_for(slot, &slots);
            assert_eq!(question.slot, slot);
            assert!(!question.text.is_empty(), "empty question for {}", slot);
            assert!(question.text.contains('?'), "no question mark for {}", slot);
        }
    }

    #[test]
    fn test_director_contextual_genre_question() {
        let gen = generator();
        let slots = SlotSet {
            director: Some("Christopher Nolan".to_string()),
            ..SlotSet::empty()
        };
        let question = gen.question_for(Slot::Genre, &slots);
        assert!(question.text.contains("Christopher Nolan"));
        assert!(question.text.contains("Inception"));
        assert!(question.text.contains("The Dark Knight"));
    }

    #[test]
    fn test_single_film_director_question() {
        let gen = generator();
        let slots = SlotSet {
            director: Some("Bong Joon Ho".to_string()),
            ..SlotSet::empty()
        };
        let question = gen.question_for(Slot::Genre, &slots);
        assert!(question.text.contains("Parasite"));
    }

    #[test]
    fn test_unknown_director_falls_back_to_generic() {
        let gen = generator();
        let slots = SlotSet {
            director: Some("Unknown Person".to_string()),
            ..SlotSet::empty()
        };
        let question = gen.question_for(Slot::Genre, &slots);
        assert!(question.text.contains("what genre"));
    }

    #[test]
    fn test_action_specific_mood_question() {
        let gen = generator();
        let slots = SlotSet {
            genre: Some(Genre::Action),
            ..SlotSet::empty()
        };
        let question = gen.question_for(Slot::Mood, &slots);
        assert!(question.text.contains("gritty"));
        assert!(question.text.contains("blockbuster"));
    }

    #[test]
    fn test_generic_mood_question() {
        let gen = generator();
        let slots = SlotSet {
            genre: Some(Genre::Drama),
            ..SlotSet::empty()
        };
        let question = gen.question_for(Slot::Mood, &slots);
        assert!(question.text.contains("light and fun"));
    }
}
