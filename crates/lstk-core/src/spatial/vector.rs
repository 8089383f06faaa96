//! Vector type for physical displacements.

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// A displacement in D-dimensional physical space.
///
/// Also backs [`Spacing`](super::Spacing), the per-axis pixel distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector<const D: usize>(pub SVector<f64, D>);

impl<const D: usize> Vector<D> {
    /// Create a new vector from components.
    pub fn new(components: [f64; D]) -> Self {
        Self(SVector::from(components))
    }

    /// Create a zero vector.
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    /// Components as a plain array.
    pub fn to_array(&self) -> [f64; D] {
        std::array::from_fn(|i| self.0[i])
    }

    /// Get the inner nalgebra vector.
    pub fn inner(&self) -> &SVector<f64, D> {
        &self.0
    }
}

impl<const D: usize> std::ops::Index<usize> for Vector<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for Vector<D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> std::ops::Add for Vector<D> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl<const D: usize> std::ops::Sub for Vector<D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl<const D: usize> std::ops::Mul<f64> for Vector<D> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vector2 = Vector<2>;

    #[test]
    fn test_vector_creation() {
        let v = Vector2::new([1.5, -2.0]);
        assert_eq!(v[0], 1.5);
        assert_eq!(v[1], -2.0);
        assert_eq!(v.to_array(), [1.5, -2.0]);
    }

    #[test]
    fn test_vector_arithmetic() {
        let v1 = Vector2::new([1.0, 2.0]);
        let v2 = Vector2::new([4.0, 6.0]);

        assert_eq!(v1 + v2, Vector2::new([5.0, 8.0]));
        assert_eq!(v2 - v1, Vector2::new([3.0, 4.0]));
        assert_eq!(v1 * 0.5, Vector2::new([0.5, 1.0]));
    }
}
