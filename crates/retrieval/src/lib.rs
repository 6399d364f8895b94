//! # Retrieval Crate
//!
//! Scoring and ranking the static catalog against filled slots, the
//! "retrieval" half of the simplified RAG loop.
//!
//! ## Architecture
//!
//! - **traits**: the `AttributeMatcher` trait, one scoring seam per slot
//! - **matchers**: the six concrete matchers with their pinned weights
//! - **scorer**: `Scorer`, which composes matchers and ranks the catalog
//!
//! ## Example Usage
//! ```ignore
//! use retrieval::Scorer;
//!
//! let scorer = Scorer::with_default_matchers();
//! let ranked = scorer.rank(&catalog, &slots, 3);
//! for entry in ranked {
//!     println!("{} (score {})", entry.movie.title, entry.score);
//! }
//! ```
//!
//! Scoring is additive and never negative; ranking is stable so ties
//! keep catalog insertion order, which makes the output fully
//! deterministic.

// Public modules
pub mod matchers;
pub mod scorer;
pub mod traits;

// Re-export main types
pub use scorer::{ScoredMovie, Scorer};
pub use traits::AttributeMatcher;
