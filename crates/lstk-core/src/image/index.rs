//! Discrete and continuous grid coordinates plus image extents.
//!
//! Axis 0 varies fastest in every buffer laid out by this crate.

/// Integer grid coordinate, one component per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index<const D: usize>(pub [i64; D]);

impl<const D: usize> Index<D> {
    pub fn new(components: [i64; D]) -> Self {
        Self(components)
    }

    /// Same value on every axis.
    pub fn filled(value: i64) -> Self {
        Self([value; D])
    }
}

impl<const D: usize> std::ops::Index<usize> for Index<D> {
    type Output = i64;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.0[axis]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for Index<D> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.0[axis]
    }
}

/// Possibly fractional grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousIndex<const D: usize>(pub [f64; D]);

impl<const D: usize> ContinuousIndex<D> {
    pub fn new(components: [f64; D]) -> Self {
        Self(components)
    }

    /// Same value on every axis.
    pub fn filled(value: f64) -> Self {
        Self([value; D])
    }
}

impl<const D: usize> From<Index<D>> for ContinuousIndex<D> {
    fn from(index: Index<D>) -> Self {
        Self(index.0.map(|i| i as f64))
    }
}

impl<const D: usize> std::ops::Index<usize> for ContinuousIndex<D> {
    type Output = f64;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.0[axis]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for ContinuousIndex<D> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.0[axis]
    }
}

/// Number of pixels along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<const D: usize>(pub [usize; D]);

impl<const D: usize> Size<D> {
    pub fn new(extents: [usize; D]) -> Self {
        Self(extents)
    }

    /// Same extent on every axis.
    pub fn filled(extent: usize) -> Self {
        Self([extent; D])
    }

    /// Total number of pixels covered.
    pub fn number_of_pixels(&self) -> usize {
        self.0.iter().product()
    }

    /// First axis with zero extent, if any.
    pub fn first_empty_axis(&self) -> Option<usize> {
        self.0.iter().position(|&extent| extent == 0)
    }

    /// Whether `index` lies in `[0, extent - 1]` on every axis.
    pub fn contains(&self, index: &Index<D>) -> bool {
        index
            .0
            .iter()
            .zip(self.0.iter())
            .all(|(&i, &extent)| i >= 0 && (i as u64) < extent as u64)
    }

    /// Linear buffer offset of an in-bounds index, `None` otherwise.
    pub fn offset(&self, index: &Index<D>) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        Some(self.offset_unchecked(&index.0.map(|i| i as usize)))
    }

    /// Linear buffer offset of an index already known to be in bounds.
    pub(crate) fn offset_unchecked(&self, index: &[usize; D]) -> usize {
        let mut offset = 0;
        let mut stride = 1;
        for axis in 0..D {
            offset += index[axis] * stride;
            stride *= self.0[axis];
        }
        offset
    }

    /// Inverse of [`offset`](Self::offset).
    pub fn index_of(&self, mut offset: usize) -> Index<D> {
        let mut index = [0i64; D];
        for axis in 0..D {
            let extent = self.0[axis].max(1);
            index[axis] = (offset % extent) as i64;
            offset /= extent;
        }
        Index(index)
    }
}
