//! # Recommendation Engine
//!
//! The orchestrator that ties the pipeline together for one request:
//!
//! 1. Extract slots from the raw text
//! 2. Check completeness against the pinned policy
//! 3. Either generate the clarifying question, or rank the catalog
//! 4. Build the downstream prompt
//!
//! One request in, one `Reply` out. The engine is stateless across
//! calls: every invocation builds a fresh `SlotSet` and the only shared
//! piece is the read-only catalog behind an `Arc`.

use crate::prompt::build_prompt;
use catalog::Catalog;
use dialogue::{check_completeness, ClarifyingQuestion, Completeness, QuestionGenerator};
use retrieval::{ScoredMovie, Scorer};
use slots::{SlotExtractor, SlotSet};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// How many ranked results a retrieval reply carries at most
pub const TOP_N: usize = 3;

/// What the system decided to do with a request.
///
/// Exactly one variant per request, by construction: either the
/// clarifying question or the ranked list, never both, never neither.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// More information needed; ask this one question
    Clarify(ClarifyingQuestion),
    /// Enough signal; the ranked results (possibly empty)
    Recommend(Vec<ScoredMovie>),
}

/// Everything produced for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// The raw request text, as received
    pub input: String,
    /// Slots extracted from the request
    pub slots: SlotSet,
    /// The decision: question or results
    pub outcome: Outcome,
    /// The assembled downstream prompt (simulated; never sent anywhere)
    pub prompt: String,
}

/// Single entry point for the whole pipeline.
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    extractor: SlotExtractor,
    questioner: QuestionGenerator,
    scorer: Scorer,
}

impl RecommendationEngine {
    /// Build an engine over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            extractor: SlotExtractor::new(catalog.clone()),
            questioner: QuestionGenerator::new(catalog.clone()),
            scorer: Scorer::with_default_matchers(),
            catalog,
        }
    }

    /// Convenience constructor over the curated builtin catalog.
    pub fn with_builtin_catalog() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    /// The catalog this engine ranks against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handle one request end to end.
    ///
    /// Never fails: unrecognizable input degrades to a clarifying
    /// question, and an unmatchable but complete request degrades to an
    /// empty result list.
    pub fn respond(&self, input: &str) -> Reply {
        let start = Instant::now();

        let slots = self.extractor.extract(input);

        let outcome = match check_completeness(&slots) {
            Completeness::Missing(slot) => {
                Outcome::Clarify(self.questioner.question_for(slot, &slots))
            }
            Completeness::Complete => {
                Outcome::Recommend(self.scorer.rank(&self.catalog, &slots, TOP_N))
            }
        };

        let prompt = build_prompt(input, &slots, &outcome);

        match &outcome {
            Outcome::Clarify(question) => info!(
                filled = slots.filled_count(),
                slot = %question.slot,
                elapsed = ?start.elapsed(),
                "asking clarifying question"
            ),
            Outcome::Recommend(results) => info!(
                filled = slots.filled_count(),
                results = results.len(),
                elapsed = ?start.elapsed(),
                "returning ranked results"
            ),
        }

        Reply {
            input: input.to_string(),
            slots,
            outcome,
            prompt,
        }
    }
}
