//! The Scorer composes attribute matchers and ranks the catalog.
//!
//! Ranking rules (pinned, testable):
//! - a movie's score is the sum of all matcher contributions
//! - score-0 movies never appear in results
//! - results are sorted descending by score; ties keep catalog
//!   insertion order (the sort is stable)
//! - output is truncated to a fixed top N

use crate::matchers::{
    DirectorMatcher, EraMatcher, GenreMatcher, LanguageMatcher, MoodMatcher, RuntimeMatcher,
};
use crate::traits::AttributeMatcher;
use catalog::{Catalog, Movie};
use slots::SlotSet;
use tracing::debug;

/// A catalog entry with its retrieval score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub score: u32,
}

/// Composes matchers into one scoring pass over the catalog.
///
/// ## Usage
/// ```ignore
/// let scorer = Scorer::with_default_matchers();
/// let ranked = scorer.rank(&catalog, &slots, 3);
/// ```
pub struct Scorer {
    matchers: Vec<Box<dyn AttributeMatcher>>,
}

impl Scorer {
    /// Create an empty scorer with no matchers.
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Add a matcher (builder pattern).
    pub fn add_matcher(mut self, matcher: impl AttributeMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// The full pinned matcher set, one per slot.
    pub fn with_default_matchers() -> Self {
        Self::new()
            .add_matcher(GenreMatcher)
            .add_matcher(MoodMatcher)
            .add_matcher(EraMatcher)
            .add_matcher(DirectorMatcher)
            .add_matcher(LanguageMatcher)
            .add_matcher(RuntimeMatcher)
    }

    /// Total score for one movie against the filled slots.
    pub fn score_movie(&self, movie: &Movie, slots: &SlotSet) -> u32 {
        self.matchers
            .iter()
            .map(|matcher| matcher.score(movie, slots))
            .sum()
    }

    /// Rank the whole catalog against the filled slots.
    ///
    /// ## Algorithm
    /// 1. Score every catalog entry (insertion order)
    /// 2. Drop entries with score 0
    /// 3. Stable-sort descending by score
    /// 4. Truncate to `top_n`
    ///
    /// An empty catalog, or slots matching nothing, yields an empty
    /// vector rather than an error.
    pub fn rank(&self, catalog: &Catalog, slots: &SlotSet, top_n: usize) -> Vec<ScoredMovie> {
        let mut scored: Vec<ScoredMovie> = catalog
            .movies()
            .iter()
            .map(|movie| ScoredMovie {
                movie: movie.clone(),
                score: self.score_movie(movie, slots),
            })
            .filter(|entry| entry.score > 0)
            .collect();

        // Vec::sort_by is stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_n);

        debug!(
            candidates = catalog.len(),
            results = scored.len(),
            "catalog ranked"
        );
        scored
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_default_matchers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Genre;
    use slots::Era;

    #[test]
    fn test_empty_slots_yield_no_results() {
        let catalog = Catalog::builtin();
        let scorer = Scorer::with_default_matchers();
        let ranked = scorer.rank(&catalog, &SlotSet::empty(), 3);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_no_zero_scores_in_results() {
        let catalog = Catalog::builtin();
        let scorer = Scorer::with_default_matchers();
        let slots = SlotSet {
            genre: Some(Genre::Musical),
            ..SlotSet::empty()
        };
        let ranked = scorer.rank(&catalog, &slots, 10);
        assert!(ranked.iter().all(|r| r.score > 0));
        // Only La La Land is a musical
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].movie.title, "La La Land");
    }

    #[test]
    fn test_ties_preserve_catalog_order() {
        let catalog = Catalog::builtin();
        let scorer = Scorer::with_default_matchers();
        let slots = SlotSet {
            genre: Some(Genre::SciFi),
            ..SlotSet::empty()
        };
        // Inception, The Avengers and The Matrix all score genre-only;
        // catalog order must be preserved
        let ranked = scorer.rank(&catalog, &slots, 3);
        let titles: Vec<&str> = ranked.iter().map(|r| r.movie.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "The Avengers", "The Matrix"]);
    }

    #[test]
    fn test_results_sorted_descending() {
        let catalog = Catalog::builtin();
        let scorer = Scorer::with_default_matchers();
        let slots = SlotSet {
            genre: Some(Genre::SciFi),
            era: Some(Era::Decade(1990)),
            ..SlotSet::empty()
        };
        let ranked = scorer.rank(&catalog, &slots, 3);
        // The Matrix gets genre + decade and must lead
        assert_eq!(ranked[0].movie.title, "The Matrix");
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_truncation_to_top_n() {
        let catalog = Catalog::builtin();
        let scorer = Scorer::with_default_matchers();
        let slots = SlotSet {
            genre: Some(Genre::Drama),
            ..SlotSet::empty()
        };
        let ranked = scorer.rank(&catalog, &slots, 2);
        assert!(ranked.len() <= 2);
    }

    #[test]
    fn test_empty_catalog_degrades_gracefully() {
        let catalog = Catalog::new(vec![]).unwrap();
        let scorer = Scorer::with_default_matchers();
        let slots = SlotSet {
            genre: Some(Genre::Drama),
            ..SlotSet::empty()
        };
        assert!(scorer.rank(&catalog, &slots, 3).is_empty());
    }

    #[test]
    fn test_empty_scorer_scores_everything_zero() {
        let catalog = Catalog::builtin();
        let scorer = Scorer::new();
        let slots = SlotSet {
            genre: Some(Genre::Drama),
            ..SlotSet::empty()
        };
        assert!(scorer.rank(&catalog, &slots, 3).is_empty());
    }
}
