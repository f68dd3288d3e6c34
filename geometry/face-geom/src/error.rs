//! Error types for face geometry operations.

use thiserror::Error;
use vec_types::Dimension;

/// Errors that can occur during face geometry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// Input vectors do not all share one dimension.
    #[error("mixed dimensions: expected {expected}, found {found}")]
    MixedDimensions {
        /// Dimension of the first vector.
        expected: Dimension,
        /// Offending dimension.
        found: Dimension,
    },

    /// An operation over a list of vectors was given an empty list.
    #[error("no vectors provided")]
    NoVectors,
}

/// Result type for face geometry operations.
pub type FaceResult<T> = std::result::Result<T, FaceError>;
