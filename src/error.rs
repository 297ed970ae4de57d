//! Error types for colony configuration and graph validation.
//!
//! Every failure is detected before the first iteration runs. Once a
//! configuration and cost matrix have been accepted the optimization loop
//! performs no I/O and cannot fail.

use thiserror::Error;

/// Errors reported while validating inputs to an ACO run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The cost matrix is not square, not symmetric, has negative or
    /// non-finite entries, a non-zero diagonal, or a zero-cost edge
    /// (which would make the inverse-cost heuristic undefined).
    #[error("invalid graph: {reason}")]
    InvalidGraph {
        /// What is wrong with the matrix.
        reason: String,
    },

    /// A run parameter is outside its admissible range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A city coordinate table could not be parsed.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the malformed content.
        reason: String,
    },
}

impl AcoError {
    pub(crate) fn graph(reason: impl Into<String>) -> Self {
        AcoError::InvalidGraph {
            reason: reason.into(),
        }
    }

    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
