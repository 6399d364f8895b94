//! Core trait for the scoring pipeline.
//!
//! Each slot contributes one `AttributeMatcher`; the `Scorer` composes
//! them and sums their contributions per movie.

use catalog::Movie;
use slots::SlotSet;

/// Scores one attribute of a movie against the filled slots.
///
/// ## Design Note
/// - `Send + Sync` so a caller may score in parallel at a higher level
/// - Returns a contribution of 0 when the slot is absent or does not
///   match; contributions are never negative, so adding a matcher can
///   only raise a movie's total
/// - Matching is pure computation over in-memory data and cannot fail,
///   so there is no `Result` in the signature
pub trait AttributeMatcher: Send + Sync {
    /// Name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// Weight this movie contributes for the matcher's slot, or 0
    fn score(&self, movie: &Movie, slots: &SlotSet) -> u32;
}
