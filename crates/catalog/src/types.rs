//! Core domain types for the movie catalog.
//!
//! A `Movie` carries the seven attributes the recommendation pipeline
//! matches against: title, genres, mood, release year, director, language
//! and runtime. Genre, mood and language are closed sets, so they are
//! enums rather than free strings; the extractor and scorer can then
//! compare them with plain equality instead of string normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Movie genres known to the system.
///
/// A movie can belong to more than one genre (e.g. Inception is both
/// Sci-Fi and Action), so `Movie` holds a `Vec<Genre>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Musical,
    Romance,
    SciFi,
    Thriller,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Musical => "Musical",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        };
        write!(f, "{}", name)
    }
}

/// The dominant mood of a movie.
///
/// Each catalog entry is tagged with exactly one mood. The extractor maps
/// free-text words like "twisty" or "lighthearted" onto these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Fun,
    Serious,
    Emotional,
    MindBending,
    Blockbuster,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mood::Fun => "fun",
            Mood::Serious => "serious",
            Mood::Emotional => "emotional",
            Mood::MindBending => "mind-bending",
            Mood::Blockbuster => "blockbuster",
        };
        write!(f, "{}", name)
    }
}

/// Languages present in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Korean,
    French,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Korean => "Korean",
            Language::French => "French",
        };
        write!(f, "{}", name)
    }
}

/// A single catalog entry.
///
/// Era and runtime bucket are not stored; they are derived from `year`
/// and `runtime_minutes` when the scorer compares a movie against a
/// request. This keeps the stored record minimal and lossless for the
/// JSON round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub genres: Vec<Genre>,
    pub mood: Mood,
    pub director: String,
    pub language: Language,
    pub runtime_minutes: u16,
}

impl Movie {
    /// Decade the movie was released in (e.g. 2008 -> 2000)
    pub fn decade(&self) -> u16 {
        self.year / 10 * 10
    }
}
