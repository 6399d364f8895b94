//! # Slots Crate
//!
//! Slot filling: turning free user text into a structured `SlotSet`.
//!
//! ## Components
//!
//! - **types**: `Slot`, `SlotSet` and the slot value types (`Era`,
//!   `RuntimeBucket`)
//! - **vocab**: the fixed keyword vocabularies and the word-boundary
//!   matcher they share
//! - **extractor**: `SlotExtractor`, the single extraction pass
//!
//! ## Example Usage
//!
//! ```ignore
//! use slots::SlotExtractor;
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let extractor = SlotExtractor::new(Arc::new(Catalog::builtin()));
//! let slots = extractor.extract("a dark korean thriller from the 2000s");
//! assert!(slots.genre.is_some());
//! ```
//!
//! Extraction is pure and deterministic: the same text always yields the
//! same `SlotSet`, and unrecognized input yields an all-absent set
//! rather than an error.

// Public modules
pub mod extractor;
pub mod types;
pub mod vocab;

// Re-export commonly used types
pub use extractor::SlotExtractor;
pub use types::{Era, RuntimeBucket, Slot, SlotSet};
