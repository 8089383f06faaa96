//! Error types for image and interpolation operations.
//!
//! Every fallible operation in this crate reports one of these variants
//! synchronously; nothing is recovered internally.

use thiserror::Error;

/// Main error type for matrix image interpolation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Evaluation attempted before an input image was bound.
    #[error("No input image bound to the interpolator")]
    UnboundImage,

    /// The grid has zero extent along an axis, so no neighbor exists.
    #[error("Image has zero extent along axis {axis}")]
    OutOfGrid { axis: usize },

    /// A continuous coordinate was NaN or infinite.
    #[error("Continuous index component {axis} is not finite")]
    NonFiniteIndex { axis: usize },

    /// Exact lookup outside the image buffer.
    #[error("Index {index:?} is outside image of size {size:?}")]
    IndexOutOfBounds { index: Vec<i64>, size: Vec<usize> },

    /// Spacing component is zero or not finite.
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(String),

    /// Direction matrix cannot be inverted.
    #[error("Direction matrix is singular")]
    SingularDirection,

    /// Component image shapes disagree.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Component images carry different physical metadata.
    #[error("Metadata mismatch: {0}")]
    MetadataMismatch(String),

    /// Tensor data could not be read back.
    #[error("Tensor error: {0}")]
    Tensor(String),
}

/// Result type for interpolation operations.
pub type Result<T> = std::result::Result<T, InterpolationError>;

impl InterpolationError {
    /// Create an out-of-bounds error from an index and the image size.
    pub fn index_out_of_bounds<const D: usize>(index: &[i64; D], size: &[usize; D]) -> Self {
        Self::IndexOutOfBounds {
            index: index.to_vec(),
            size: size.to_vec(),
        }
    }

    /// Create an invalid spacing error.
    pub fn invalid_spacing(msg: impl Into<String>) -> Self {
        Self::InvalidSpacing(msg.into())
    }

    /// Create a metadata mismatch error.
    pub fn metadata_mismatch(msg: impl Into<String>) -> Self {
        Self::MetadataMismatch(msg.into())
    }

    /// Create a tensor error.
    pub fn tensor(msg: impl Into<String>) -> Self {
        Self::Tensor(msg.into())
    }
}
