//! Image function trait for sampling an image at arbitrary locations.

use crate::error::Result;
use crate::image::{ContinuousIndex, Index};
use crate::spatial::Point;

/// A function of position over a bound image.
///
/// Implementors answer the same query expressed three ways: a physical
/// point, a continuous index, or a discrete index.
///
/// # Type Parameters
/// * `D` - The image dimensionality
pub trait ImageFunction<const D: usize> {
    /// Value produced at a location.
    type Output;

    /// Evaluate at a point in physical space.
    fn evaluate(&self, point: &Point<D>) -> Result<Self::Output>;

    /// Evaluate at a possibly fractional grid coordinate.
    fn evaluate_at_continuous_index(&self, index: &ContinuousIndex<D>) -> Result<Self::Output>;

    /// Evaluate exactly at a grid coordinate.
    fn evaluate_at_index(&self, index: &Index<D>) -> Result<Self::Output>;
}
