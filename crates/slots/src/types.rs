//! Slot identifiers and slot value types.
//!
//! A "slot" is one of the six named attributes the system tries to pull
//! out of the user's request. `SlotSet` is the structured result of one
//! extraction pass: each field is `Option<T>` because any slot may be
//! absent, and an all-absent set is a valid outcome, not an error.

use catalog::{Genre, Language, Mood};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six slots the extractor knows about.
///
/// `ALL` lists them in canonical priority order (highest first); the
/// completeness policy and all user-facing listings iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Genre,
    Mood,
    Era,
    Director,
    Language,
    Runtime,
}

impl Slot {
    /// All slots, highest priority first
    pub const ALL: [Slot; 6] = [
        Slot::Genre,
        Slot::Mood,
        Slot::Era,
        Slot::Director,
        Slot::Language,
        Slot::Runtime,
    ];

    /// Lowercase slot name as shown to users and in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Genre => "genre",
            Slot::Mood => "mood",
            Slot::Era => "era",
            Slot::Director => "director",
            Slot::Language => "language",
            Slot::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A release-era preference extracted from the request.
///
/// Explicit years and decades come from the text verbatim; `Classic` and
/// `Recent` are qualitative buckets with pinned cutoffs so matching stays
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    /// An explicit four-digit year, e.g. "from 2008"
    Year(u16),
    /// A decade, stored as its first year, e.g. "the 90s" -> Decade(1990)
    Decade(u16),
    /// Anything released before 1990
    Classic,
    /// Released in 2015 or later
    Recent,
}

impl Era {
    /// First year that counts as "recent"
    pub const RECENT_FROM: u16 = 2015;
    /// First year that no longer counts as "classic"
    pub const CLASSIC_BEFORE: u16 = 1990;
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::Year(y) => write!(f, "{}", y),
            Era::Decade(d) => write!(f, "{}s", d),
            Era::Classic => write!(f, "classic"),
            Era::Recent => write!(f, "recent"),
        }
    }
}

/// Runtime preference, bucketed the way the catalog describes runtimes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeBucket {
    /// Under 100 minutes
    Short,
    /// 100 to 140 minutes
    Medium,
    /// Over 140 minutes
    Long,
}

impl RuntimeBucket {
    /// Bucket a concrete runtime in minutes
    pub fn of_minutes(minutes: u16) -> Self {
        if minutes < 100 {
            RuntimeBucket::Short
        } else if minutes <= 140 {
            RuntimeBucket::Medium
        } else {
            RuntimeBucket::Long
        }
    }
}

impl fmt::Display for RuntimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuntimeBucket::Short => "short",
            RuntimeBucket::Medium => "medium",
            RuntimeBucket::Long => "long",
        };
        write!(f, "{}", name)
    }
}

/// The structured result of extracting slots from one request.
///
/// Created fresh per request and treated as immutable once extraction
/// completes. All fields are optional; `filled` lists the present ones
/// in canonical slot order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSet {
    pub genre: Option<Genre>,
    pub mood: Option<Mood>,
    pub era: Option<Era>,
    pub director: Option<String>,
    pub language: Option<Language>,
    pub runtime: Option<RuntimeBucket>,
}

impl SlotSet {
    /// A set with every slot absent
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the given slot has a value
    pub fn is_filled(&self, slot: Slot) -> bool {
        match slot {
            Slot::Genre => self.genre.is_some(),
            Slot::Mood => self.mood.is_some(),
            Slot::Era => self.era.is_some(),
            Slot::Director => self.director.is_some(),
            Slot::Language => self.language.is_some(),
            Slot::Runtime => self.runtime.is_some(),
        }
    }

    /// Number of filled slots
    pub fn filled_count(&self) -> usize {
        Slot::ALL.iter().filter(|s| self.is_filled(**s)).count()
    }

    /// True when no slot was recognized at all
    pub fn is_all_absent(&self) -> bool {
        self.filled_count() == 0
    }

    /// Filled slots with their display values, in canonical order
    pub fn filled(&self) -> Vec<(Slot, String)> {
        let mut out = Vec::new();
        if let Some(genre) = self.genre {
            out.push((Slot::Genre, genre.to_string()));
        }
        if let Some(mood) = self.mood {
            out.push((Slot::Mood, mood.to_string()));
        }
        if let Some(era) = self.era {
            out.push((Slot::Era, era.to_string()));
        }
        if let Some(director) = &self.director {
            out.push((Slot::Director, director.clone()));
        }
        if let Some(language) = self.language {
            out.push((Slot::Language, language.to_string()));
        }
        if let Some(runtime) = self.runtime {
            out.push((Slot::Runtime, runtime.to_string()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_set() {
        let slots = SlotSet::empty();
        assert!(slots.is_all_absent());
        assert_eq!(slots.filled_count(), 0);
        assert!(slots.filled().is_empty());
    }

    #[test]
    fn test_filled_order_is_canonical() {
        let slots = SlotSet {
            runtime: Some(RuntimeBucket::Short),
            genre: Some(Genre::Comedy),
            ..SlotSet::empty()
        };
        let filled = slots.filled();
        assert_eq!(filled[0].0, Slot::Genre);
        assert_eq!(filled[1].0, Slot::Runtime);
    }

    #[test]
    fn test_runtime_bucketing() {
        assert_eq!(RuntimeBucket::of_minutes(99), RuntimeBucket::Short);
        assert_eq!(RuntimeBucket::of_minutes(100), RuntimeBucket::Medium);
        assert_eq!(RuntimeBucket::of_minutes(140), RuntimeBucket::Medium);
        assert_eq!(RuntimeBucket::of_minutes(141), RuntimeBucket::Long);
    }

    #[test]
    fn test_era_display() {
        assert_eq!(Era::Decade(1990).to_string(), "1990s");
        assert_eq!(Era::Year(2008).to_string(), "2008");
        assert_eq!(Era::Classic.to_string(), "classic");
    }
}
