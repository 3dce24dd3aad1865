//! Error types.
//!
//! Every error here is a configuration error: fatal to the operation that
//! raised it, never to the process, and never retried.

use thiserror::Error;

/// Result type returned by fallible CAM routines.
pub type CaResult<T> = Result<T, CaError>;

/// Error encountered while constructing or advancing a CAM.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CaError {
    /// Planes supplied at construction do not share a single shape, or a
    /// shape has a zero extent.
    #[error("plane shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// The shape the CAM requires.
        expected: String,
        /// The offending shape.
        found: String,
    },

    /// Alphabet size outside the supported `2..=256` range.
    #[error("invalid state count: {0} (must be in 2..=256)")]
    InvalidStateCount(usize),

    /// Neighborhood offset with the wrong number of components for the CAM's
    /// dimensionality.
    #[error("invalid offset: {found} components in a {ndim}-dimensional CAM")]
    InvalidOffset {
        /// The CAM's dimensionality.
        ndim: usize,
        /// Number of components in the offending offset.
        found: usize,
    },

    /// Neighbor lookup escaped the lattice under the `Reject` boundary
    /// policy.
    #[error("neighbor of {pos} at offset {offset} is outside the lattice")]
    OutOfBounds {
        /// The focal coordinate.
        pos: String,
        /// The offending offset.
        offset: String,
    },

    /// Rule string does not match any supported grammar.
    #[error("malformed rule: {0:?}")]
    MalformedRule(String),
}
