//! Slot-completeness policy.
//!
//! Decides whether an extracted `SlotSet` carries enough signal to
//! retrieve confidently, and if not, which single slot to ask about.
//!
//! ## Pinned policy
//!
//! - Priority order: genre > mood > era > director > language > runtime
//!   (this is `Slot::ALL`).
//! - "Sufficiently complete" means genre is present AND at least one
//!   discriminating slot (mood or era) is present.
//! - Otherwise the decision is the highest-priority missing slot.
//!
//! The function is pure: the same `SlotSet` always yields the same
//! decision. The example regression tests below pin the policy so it
//! cannot drift silently.

use slots::{Slot, SlotSet};

/// Outcome of the completeness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// Enough signal to retrieve; no question needed
    Complete,
    /// Ask about this slot before retrieving
    Missing(Slot),
}

/// Apply the pinned completeness policy to an extracted slot set.
pub fn check_completeness(slots: &SlotSet) -> Completeness {
    let has_discriminator = slots.mood.is_some() || slots.era.is_some();
    if slots.genre.is_some() && has_discriminator {
        return Completeness::Complete;
    }

    // Highest-priority missing slot. At least one of genre/mood/era is
    // absent here, so the search always finds something.
    let missing = Slot::ALL
        .iter()
        .copied()
        .find(|slot| !slots.is_filled(*slot))
        .unwrap_or(Slot::Genre);
    Completeness::Missing(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, Mood};
    use slots::Era;

    #[test]
    fn test_all_absent_asks_genre() {
        let decision = check_completeness(&SlotSet::empty());
        assert_eq!(decision, Completeness::Missing(Slot::Genre));
    }

    #[test]
    fn test_genre_plus_era_is_complete() {
        let slots = SlotSet {
            genre: Some(Genre::SciFi),
            era: Some(Era::Decade(1990)),
            ..SlotSet::empty()
        };
        assert_eq!(check_completeness(&slots), Completeness::Complete);
    }

    #[test]
    fn test_genre_plus_mood_is_complete() {
        let slots = SlotSet {
            genre: Some(Genre::Action),
            mood: Some(Mood::Fun),
            ..SlotSet::empty()
        };
        assert_eq!(check_completeness(&slots), Completeness::Complete);
    }

    #[test]
    fn test_genre_alone_asks_mood() {
        let slots = SlotSet {
            genre: Some(Genre::Drama),
            ..SlotSet::empty()
        };
        assert_eq!(check_completeness(&slots), Completeness::Missing(Slot::Mood));
    }

    #[test]
    fn test_director_alone_asks_genre() {
        let slots = SlotSet {
            director: Some("Christopher Nolan".to_string()),
            ..SlotSet::empty()
        };
        assert_eq!(check_completeness(&slots), Completeness::Missing(Slot::Genre));
    }

    #[test]
    fn test_mood_and_era_without_genre_asks_genre() {
        let slots = SlotSet {
            mood: Some(Mood::Serious),
            era: Some(Era::Recent),
            ..SlotSet::empty()
        };
        assert_eq!(check_completeness(&slots), Completeness::Missing(Slot::Genre));
    }

    #[test]
    fn test_decision_is_deterministic() {
        let slots = SlotSet {
            genre: Some(Genre::Comedy),
            ..SlotSet::empty()
        };
        assert_eq!(check_completeness(&slots), check_completeness(&slots));
    }
}
