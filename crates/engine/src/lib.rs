//! # Engine Crate
//!
//! The single-entry-point orchestrator for the conversational
//! recommendation pipeline, plus the prompt builder.
//!
//! ## Control Flow
//!
//! ```text
//! extract -> completeness check -> (incomplete) question -> stop
//!                                \-> (complete) rank -> prompt -> results
//! ```
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{Outcome, RecommendationEngine};
//!
//! let engine = RecommendationEngine::with_builtin_catalog();
//! match engine.respond("a dark korean thriller").outcome {
//!     Outcome::Clarify(q) => println!("{}", q.text),
//!     Outcome::Recommend(results) => {
//!         for r in results {
//!             println!("{} ({})", r.movie.title, r.score);
//!         }
//!     }
//! }
//! ```

// Public modules
pub mod orchestrator;
pub mod prompt;

// Re-export main types
pub use crate::orchestrator::{Outcome, RecommendationEngine, Reply, TOP_N};
pub use crate::prompt::{build_prompt, FewShotExample, FEW_SHOT_EXAMPLES, SYSTEM_PROMPT};
