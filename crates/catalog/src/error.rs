//! Error types for the catalog crate.
//!
//! The catalog is the only place in the system where loading can fail
//! (reading an external JSON file). Everything downstream of a loaded
//! catalog is pure computation and infallible.

use thiserror::Error;

/// Errors that can occur while loading or exporting a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading or writing a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file contained invalid JSON or fields with invalid values
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A movie record failed validation after parsing
    #[error("Invalid movie '{title}': {reason}")]
    InvalidMovie { title: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
