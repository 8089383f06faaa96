//! Spacing between adjacent pixels along each axis.

use super::Vector;

/// Physical distance between adjacent pixels, one component per axis.
pub type Spacing<const D: usize> = Vector<D>;

impl<const D: usize> Spacing<D> {
    /// Same spacing on every axis.
    pub fn uniform(value: f64) -> Self {
        Self::new([value; D])
    }

    /// First axis whose spacing is zero or not finite, if any.
    pub fn first_invalid_axis(&self) -> Option<usize> {
        (0..D).find(|&i| !self[i].is_finite() || self[i] == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_uniform() {
        assert_eq!(Spacing::<3>::uniform(1.0), Spacing::new([1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_first_invalid_axis() {
        assert_eq!(Spacing::<2>::new([0.5, 2.0]).first_invalid_axis(), None);
        assert_eq!(Spacing::<2>::new([0.5, 0.0]).first_invalid_axis(), Some(1));
        assert_eq!(Spacing::<2>::new([f64::NAN, 1.0]).first_invalid_axis(), Some(0));
    }
}
