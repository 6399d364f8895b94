//! # Catalog Crate
//!
//! The static movie catalog and its domain types.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, Mood, Language)
//! - **catalog**: The insertion-ordered Catalog, with a curated builtin
//!   set and optional JSON import/export
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! for movie in catalog.movies() {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```
//!
//! The catalog is read-only after construction and `Send + Sync`, so it
//! can be shared across threads behind an `Arc` if a caller chooses to
//! parallelize at a higher level.

// Public modules
pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use types::{Genre, Language, Mood, Movie};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }

    #[test]
    fn test_builtin_movies_have_all_attributes() {
        let catalog = Catalog::builtin();
        for movie in catalog.movies() {
            assert!(!movie.title.is_empty());
            assert!(!movie.director.is_empty());
            assert!(!movie.genres.is_empty());
            assert!(movie.year >= 1900);
            assert!(movie.runtime_minutes > 0);
        }
    }
}
