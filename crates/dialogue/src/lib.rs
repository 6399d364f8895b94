//! # Dialogue Crate
//!
//! The dialogue-control half of the pipeline: deciding whether to ask a
//! clarifying question, and phrasing it.
//!
//! ## Components
//!
//! - **policy**: the pinned slot-completeness policy
//!   (`check_completeness`)
//! - **questions**: `QuestionGenerator` and the fixed question templates
//!
//! Both components are pure and deterministic; the policy order and the
//! templates are the configuration of the system, compiled in.

// Public modules
pub mod policy;
pub mod questions;

// Re-export commonly used types
pub use policy::{check_completeness, Completeness};
pub use questions::{ClarifyingQuestion, QuestionGenerator};
