//! The static, insertion-ordered movie catalog.
//!
//! The catalog is loaded once at process start and never mutated.
//! Insertion order matters: the scorer breaks score ties by catalog
//! order, so `Catalog` is backed by a `Vec` rather than a map.

use crate::error::{CatalogError, Result};
use crate::types::{Genre, Language, Mood, Movie};
use std::path::Path;

/// Read-only, insertion-ordered collection of movies.
///
/// Shared across the pipeline behind an `Arc`; all accessors borrow.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create a catalog from an explicit list of movies.
    ///
    /// Rejects movies with no genres or a zero runtime, since the scorer
    /// assumes every entry has something to match against.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        for movie in &movies {
            if movie.genres.is_empty() {
                return Err(CatalogError::InvalidMovie {
                    title: movie.title.clone(),
                    reason: "no genres".to_string(),
                });
            }
            if movie.runtime_minutes == 0 {
                return Err(CatalogError::InvalidMovie {
                    title: movie.title.clone(),
                    reason: "zero runtime".to_string(),
                });
            }
        }
        Ok(Self { movies })
    }

    /// The curated default catalog.
    ///
    /// Small by design; the demo is about the dialogue logic, not scale.
    pub fn builtin() -> Self {
        let movies = vec![
            movie("Inception", 2010, vec![Genre::SciFi, Genre::Action], Mood::MindBending, "Christopher Nolan", Language::English, 148),
            movie("Parasite", 2019, vec![Genre::Drama, Genre::Thriller], Mood::Serious, "Bong Joon Ho", Language::Korean, 132),
            movie("The Avengers", 2012, vec![Genre::SciFi, Genre::Action], Mood::Blockbuster, "Joss Whedon", Language::English, 143),
            movie("La La Land", 2016, vec![Genre::Musical, Genre::Romance], Mood::Emotional, "Damien Chazelle", Language::English, 128),
            movie("The Dark Knight", 2008, vec![Genre::Action, Genre::Drama], Mood::Serious, "Christopher Nolan", Language::English, 152),
            movie("The Matrix", 1999, vec![Genre::SciFi, Genre::Action], Mood::MindBending, "Lana Wachowski", Language::English, 136),
            movie("Groundhog Day", 1993, vec![Genre::Comedy, Genre::Romance], Mood::Fun, "Harold Ramis", Language::English, 101),
            movie("Casablanca", 1942, vec![Genre::Drama, Genre::Romance], Mood::Emotional, "Michael Curtiz", Language::English, 102),
            movie("Amelie", 2001, vec![Genre::Comedy, Genre::Romance], Mood::Fun, "Jean-Pierre Jeunet", Language::French, 122),
            movie("Oldboy", 2003, vec![Genre::Thriller, Genre::Drama], Mood::Serious, "Park Chan-wook", Language::Korean, 120),
        ];
        // The builtin list is valid by construction
        Self { movies }
    }

    /// Parse a catalog from a JSON string (array of movie records)
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the catalog to pretty-printed JSON.
    ///
    /// Round-trips losslessly through `from_json_str`.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.movies)?)
    }

    /// All movies, in insertion order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// True when the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All distinct director names, in catalog order
    pub fn directors(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for movie in &self.movies {
            if !seen.contains(&movie.director.as_str()) {
                seen.push(movie.director.as_str());
            }
        }
        seen
    }

    /// Movies by a given director (exact name match, case-insensitive)
    pub fn movies_by_director(&self, director: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.director.eq_ignore_ascii_case(director))
            .collect()
    }
}

fn movie(
    title: &str,
    year: u16,
    genres: Vec<Genre>,
    mood: Mood,
    director: &str,
    language: Language,
    runtime_minutes: u16,
) -> Movie {
    Movie {
        title: title.to_string(),
        year,
        genres,
        mood,
        director: director.to_string(),
        language,
        runtime_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_nonempty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_catalog_order_is_stable() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.movies()[0].title, "Inception");
        assert_eq!(catalog.movies()[4].title, "The Dark Knight");
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_string().unwrap();
        let reloaded = Catalog::from_json_str(&json).unwrap();
        assert_eq!(catalog.movies(), reloaded.movies());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        // An empty catalog degrades to "no results", it is not an error
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_movie_without_genres_is_rejected() {
        let bad = Movie {
            title: "Broken".to_string(),
            year: 2000,
            genres: vec![],
            mood: Mood::Fun,
            director: "Nobody".to_string(),
            language: Language::English,
            runtime_minutes: 90,
        };
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_directors_deduplicated_in_order() {
        let catalog = Catalog::builtin();
        let directors = catalog.directors();
        // Nolan directs two catalog entries but appears once
        assert_eq!(
            directors.iter().filter(|d| **d == "Christopher Nolan").count(),
            1
        );
        assert_eq!(directors[0], "Christopher Nolan");
    }

    #[test]
    fn test_movies_by_director() {
        let catalog = Catalog::builtin();
        let nolan = catalog.movies_by_director("christopher nolan");
        assert_eq!(nolan.len(), 2);
        assert_eq!(nolan[0].title, "Inception");
        assert_eq!(nolan[1].title, "The Dark Knight");
    }
}
