//! Error types for `HudForge`

use thiserror::Error;

/// The error type for `HudForge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Color Errors ====================
    /// The input is not a recognized hex color or `"R G B A"` string.
    #[error("invalid color format '{input}': {reason}")]
    InvalidColorFormat {
        /// The rejected input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    // ==================== Nested Mapping Errors ====================
    /// A value could not be classified as scalar or mapping during a merge.
    #[error("merge failed at {path}: {message}")]
    MergeFailure {
        /// Key path of the offending value.
        path: String,
        /// Description of the mismatch.
        message: String,
    },

    /// A key on a nested path already holds a scalar value.
    #[error("cannot descend into {path}: key holds a scalar value")]
    PathConflict {
        /// Key path up to and including the blocking key.
        path: String,
    },

    // ==================== IO / Parsing Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for `HudForge` operations.
pub type Result<T> = std::result::Result<T, Error>;
