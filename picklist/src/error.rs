//! Error types.
//!
//! Only programmatic misuse is an error. Keyboard and pointer paths never
//! fail: out-of-range indices are clamped, an empty list ignores index
//! operations, and selection-mode violations are no-ops.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    /// `load_json` was given something other than an array of records.
    #[error("Invalid input: expected {expected}, found {found}")]
    InvalidInput {
        expected: &'static str,
        found: &'static str,
    },

    /// Two records in one load carry the same explicit id.
    #[error("Duplicate item id '{id}' (records {first} and {second})")]
    DuplicateIdentity {
        /// The colliding id.
        id: String,
        /// Position of the first record carrying it.
        first: usize,
        /// Position of the second record carrying it.
        second: usize,
    },

    #[error("Unknown selection mode '{0}' (expected none, single or multiple)")]
    UnknownSelectionMode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
