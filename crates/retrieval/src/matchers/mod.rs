//! Matcher implementations for the scoring pipeline.
//!
//! One matcher per slot. The weights are the pinned scoring policy:
//! director 4, genre 3, era 3/2, language 2, mood 2, runtime 1.

pub mod director;
pub mod era;
pub mod genre;
pub mod language;
pub mod mood;
pub mod runtime;

// Re-export for convenience
pub use director::DirectorMatcher;
pub use era::EraMatcher;
pub use genre::GenreMatcher;
pub use language::LanguageMatcher;
pub use mood::MoodMatcher;
pub use runtime::RuntimeMatcher;
