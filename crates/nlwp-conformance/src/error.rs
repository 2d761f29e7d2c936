//! # Error Types
//!
//! Loading failures are fatal: comparison is meaningless without both
//! schema sources, so the run terminates before any model is evaluated.
//! Structural mismatches and absent models are not errors; they are
//! ordinary report outcomes (see [`crate::validate::Verdict`]).

use thiserror::Error;

/// Error raised while obtaining the two schema sources.
#[derive(Error, Debug)]
pub enum ConformanceError {
    /// The TypeSpec-generated OpenAPI artifact does not exist.
    #[error("specification artifact not found at '{path}'")]
    MissingArtifact {
        /// Path that was probed for the artifact.
        path: String,
    },

    /// The implementation's model library exports no schemas at all.
    #[error("implementation model library exports no schemas")]
    MissingDependency,

    /// The artifact exists but is not a usable specification document.
    #[error("malformed specification document '{path}': {reason}")]
    MalformedSpecification {
        /// Path to the offending document.
        path: String,
        /// Why the document could not be used.
        reason: String,
    },

    /// IO error reading the specification artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConformanceError {
    /// Operator-facing remediation for the user-fixable failure classes.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            ConformanceError::MissingArtifact { .. } => {
                Some("Run `npx tsp compile .` to generate the OpenAPI artifact first.")
            }
            ConformanceError::MissingDependency => {
                Some("Install the protocol model library (nlwp-models) so its schema registry is available.")
            }
            _ => None,
        }
    }
}
