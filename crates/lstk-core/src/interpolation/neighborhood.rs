//! Corner enumeration and weights for multilinear interpolation.

use crate::error::{InterpolationError, Result};
use crate::image::{ContinuousIndex, Size};

/// One grid corner contributing to an interpolated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner<const D: usize> {
    /// Neighbor index, already clamped into the grid.
    pub index: [usize; D],
    /// Product of the per-axis linear weights.
    pub weight: f64,
}

/// The up to `2^D` grid corners surrounding a continuous index.
///
/// On each axis the coordinate splits into `base = floor(x)` and
/// `f = x - base`; the lower neighbor gets weight `1 - f` and the upper one
/// `f`. Neighbors outside `[0, extent - 1]` are clamped to the edge, so
/// queries near or beyond the border replicate edge pixels. Corners whose
/// weight is exactly zero are dropped, which makes a query on a grid point
/// select a single corner with weight `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearNeighborhood<const D: usize> {
    corners: Vec<Corner<D>>,
}

impl<const D: usize> LinearNeighborhood<D> {
    /// Compute the neighborhood of `index` in a grid of `size`.
    ///
    /// # Errors
    /// * `OutOfGrid` if any axis has zero extent
    /// * `NonFiniteIndex` if any coordinate is NaN or infinite
    pub fn new(size: &Size<D>, index: &ContinuousIndex<D>) -> Result<Self> {
        if let Some(axis) = size.first_empty_axis() {
            return Err(InterpolationError::OutOfGrid { axis });
        }

        let mut lower = [0usize; D];
        let mut upper = [0usize; D];
        let mut fraction = [0.0f64; D];
        for axis in 0..D {
            let x = index[axis];
            if !x.is_finite() {
                return Err(InterpolationError::NonFiniteIndex { axis });
            }
            let base_f = x.floor();
            fraction[axis] = x - base_f;
            let base = base_f as i64;
            let last = size.0[axis] as i64 - 1;
            lower[axis] = base.clamp(0, last) as usize;
            upper[axis] = base.saturating_add(1).clamp(0, last) as usize;
        }

        let mut corners = Vec::with_capacity(1 << D);
        for mask in 0..(1usize << D) {
            let mut corner_index = [0usize; D];
            let mut weight = 1.0;
            for axis in 0..D {
                if mask & (1 << axis) == 0 {
                    corner_index[axis] = lower[axis];
                    weight *= 1.0 - fraction[axis];
                } else {
                    corner_index[axis] = upper[axis];
                    weight *= fraction[axis];
                }
            }
            if weight != 0.0 {
                corners.push(Corner {
                    index: corner_index,
                    weight,
                });
            }
        }

        Ok(Self { corners })
    }

    /// Contributing corners, lower neighbors first.
    pub fn corners(&self) -> &[Corner<D>] {
        &self.corners
    }

    /// Sum of all corner weights.
    pub fn total_weight(&self) -> f64 {
        self.corners.iter().map(|c| c.weight).sum()
    }
}
