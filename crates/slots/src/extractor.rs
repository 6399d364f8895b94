//! Keyword-driven slot extraction from raw user text.
//!
//! The extractor is the first pipeline stage and a leaf component: it
//! only reads the fixed vocabularies and the catalog's director list.
//! It never fails: empty or nonsensical input simply yields an
//! all-absent `SlotSet`.

use crate::types::{Era, RuntimeBucket, SlotSet};
use crate::vocab::{
    contains_keyword, ERA_CLASSIC_KEYWORDS, ERA_RECENT_KEYWORDS, GENRE_KEYWORDS,
    LANGUAGE_KEYWORDS, MOOD_KEYWORDS, RUNTIME_LONG_KEYWORDS, RUNTIME_SHORT_KEYWORDS,
};
use catalog::{Catalog, Genre, Language, Mood};
use std::sync::Arc;
use tracing::debug;

/// Extracts a `SlotSet` from free text by keyword and pattern matching.
///
/// Holds a shared reference to the catalog so director names can be
/// matched against the actual entries instead of a separate list.
pub struct SlotExtractor {
    catalog: Arc<Catalog>,
}

impl SlotExtractor {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Run one extraction pass over the raw request text.
    ///
    /// Matching is case-insensitive and word-bounded; each slot takes the
    /// first vocabulary hit so results are deterministic.
    pub fn extract(&self, text: &str) -> SlotSet {
        let lowered = text.to_lowercase();

        let slots = SlotSet {
            genre: extract_genre(&lowered),
            mood: extract_mood(&lowered),
            era: extract_era(&lowered),
            director: self.extract_director(&lowered),
            language: extract_language(&lowered),
            runtime: extract_runtime(&lowered),
        };

        debug!(
            filled = slots.filled_count(),
            "slot extraction complete"
        );
        slots
    }

    /// Match director names from the catalog.
    ///
    /// Accepts the full name or the final name token ("nolan" for
    /// "Christopher Nolan"), ignoring tokens shorter than three
    /// characters to avoid false hits on particles like "Ho".
    fn extract_director(&self, lowered: &str) -> Option<String> {
        for director in self.catalog.directors() {
            let full = director.to_lowercase();
            if contains_keyword(lowered, &full) {
                return Some(director.to_string());
            }
            if let Some(last) = full.split_whitespace().next_back() {
                if last.len() >= 3 && contains_keyword(lowered, last) {
                    return Some(director.to_string());
                }
            }
        }
        None
    }
}

fn extract_genre(lowered: &str) -> Option<Genre> {
    GENRE_KEYWORDS
        .iter()
        .find(|(keyword, _)| contains_keyword(lowered, keyword))
        .map(|(_, genre)| *genre)
}

fn extract_mood(lowered: &str) -> Option<Mood> {
    for (mood, keywords) in MOOD_KEYWORDS {
        if keywords.iter().any(|kw| contains_keyword(lowered, kw)) {
            return Some(*mood);
        }
    }
    None
}

fn extract_language(lowered: &str) -> Option<Language> {
    LANGUAGE_KEYWORDS
        .iter()
        .find(|(keyword, _)| contains_keyword(lowered, keyword))
        .map(|(_, language)| *language)
}

fn extract_runtime(lowered: &str) -> Option<RuntimeBucket> {
    if RUNTIME_SHORT_KEYWORDS
        .iter()
        .any(|kw| contains_keyword(lowered, kw))
    {
        return Some(RuntimeBucket::Short);
    }
    if RUNTIME_LONG_KEYWORDS
        .iter()
        .any(|kw| contains_keyword(lowered, kw))
    {
        return Some(RuntimeBucket::Long);
    }
    None
}

/// Era extraction: explicit year > decade mention > qualitative keyword.
///
/// Recognized forms, in precedence order:
/// - four-digit years 1900-2099 ("from 2008")
/// - four-digit decades ("the 1990s")
/// - two-digit decades ("the 90s"), resolved into the 1900s
/// - "classic" / "recent" style qualitative keywords
fn extract_era(lowered: &str) -> Option<Era> {
    let mut decade: Option<Era> = None;

    for token in lowered.split(|c: char| !c.is_ascii_alphanumeric()) {
        if token.is_empty() {
            continue;
        }

        // Explicit year wins immediately
        if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(year) = token.parse::<u16>() {
                if (1900..=2099).contains(&year) {
                    return Some(Era::Year(year));
                }
            }
        }

        // Decade forms: remember the first one, keep scanning for a year
        if decade.is_none() {
            if let Some(prefix) = token.strip_suffix('s') {
                if prefix.chars().all(|c| c.is_ascii_digit()) {
                    match prefix.len() {
                        4 => {
                            if let Ok(year) = prefix.parse::<u16>() {
                                if (1900..=2099).contains(&year) && year % 10 == 0 {
                                    decade = Some(Era::Decade(year));
                                }
                            }
                        }
                        2 => {
                            if let Ok(tens) = prefix.parse::<u16>() {
                                if tens % 10 == 0 && tens >= 10 {
                                    decade = Some(Era::Decade(1900 + tens));
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    if decade.is_some() {
        return decade;
    }

    if ERA_CLASSIC_KEYWORDS
        .iter()
        .any(|kw| contains_keyword(lowered, kw))
    {
        return Some(Era::Classic);
    }
    if ERA_RECENT_KEYWORDS
        .iter()
        .any(|kw| contains_keyword(lowered, kw))
    {
        return Some(Era::Recent);
    }
    None
}
