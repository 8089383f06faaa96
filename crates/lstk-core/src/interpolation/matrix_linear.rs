//! Linear interpolation of matrix-valued images.
//!
//! Each output entry `(row, col)` is the multilinear interpolation of entry
//! `(row, col)` across the surrounding pixels, accumulated in `f64` whatever
//! the stored component type.

use crate::error::{InterpolationError, Result};
use crate::image::{ContinuousIndex, Index, MatrixImage, PixelComponent, RealMatrix};
use crate::spatial::Point;
use super::neighborhood::LinearNeighborhood;
use super::trait_::ImageFunction;

/// Multilinear interpolator over a borrowed [`MatrixImage`].
///
/// The interpolator never owns or mutates its image. Rebinding takes
/// `&mut self`, so a shared interpolator can be evaluated from several
/// threads at once.
///
/// # Examples
/// ```rust
/// use lstk_core::image::{ContinuousIndex, ImageMetadata, MatrixImage, Size};
/// use lstk_core::interpolation::{ImageFunction, MatrixLinearInterpolator};
/// use nalgebra::Matrix2;
///
/// let pixel = Matrix2::new(7i8, 9, 11, 13);
/// let image = MatrixImage::filled(Size::new([10, 10]), ImageMetadata::default(), pixel);
/// let interpolator = MatrixLinearInterpolator::with_image(&image);
///
/// let value = interpolator
///     .evaluate_at_continuous_index(&ContinuousIndex::new([4.5, 4.5]))
///     .unwrap();
/// assert_eq!(value, Matrix2::new(7.0, 9.0, 11.0, 13.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatrixLinearInterpolator<'a, T: PixelComponent, const R: usize, const C: usize, const D: usize> {
    image: Option<&'a MatrixImage<T, R, C, D>>,
}

impl<'a, T: PixelComponent, const R: usize, const C: usize, const D: usize> MatrixLinearInterpolator<'a, T, R, C, D> {
    /// Create an interpolator with no bound image.
    pub fn new() -> Self {
        Self { image: None }
    }

    /// Create an interpolator bound to `image`.
    pub fn with_image(image: &'a MatrixImage<T, R, C, D>) -> Self {
        let mut interpolator = Self::new();
        interpolator.set_input_image(image);
        interpolator
    }

    /// Bind `image`, replacing any previously bound one.
    pub fn set_input_image(&mut self, image: &'a MatrixImage<T, R, C, D>) {
        tracing::debug!(size = ?image.size().0, rows = R, cols = C, "bound input image to matrix linear interpolator");
        self.image = Some(image);
    }

    /// Currently bound image.
    pub fn input_image(&self) -> Option<&'a MatrixImage<T, R, C, D>> {
        self.image
    }

    /// Whether `index` addresses a pixel of the bound image.
    ///
    /// `false` when no image is bound.
    pub fn is_inside_buffer_index(&self, index: &Index<D>) -> bool {
        self.image.is_some_and(|image| image.size().contains(index))
    }

    /// Whether `index` lies within `[0, extent - 1]` on every axis.
    pub fn is_inside_buffer_continuous_index(&self, index: &ContinuousIndex<D>) -> bool {
        self.image.is_some_and(|image| {
            (0..D).all(|axis| {
                let extent = image.size().0[axis];
                extent > 0 && index[axis] >= 0.0 && index[axis] <= (extent - 1) as f64
            })
        })
    }

    /// Whether `point` maps inside the bound image.
    pub fn is_inside_buffer(&self, point: &Point<D>) -> bool {
        self.image.is_some_and(|image| {
            self.is_inside_buffer_continuous_index(&image.transform_physical_point_to_continuous_index(point))
        })
    }

    fn bound_image(&self) -> Result<&'a MatrixImage<T, R, C, D>> {
        self.image.ok_or(InterpolationError::UnboundImage)
    }

    fn interpolate(image: &MatrixImage<T, R, C, D>, index: &ContinuousIndex<D>) -> Result<RealMatrix<R, C>> {
        let neighborhood = LinearNeighborhood::new(image.size(), index)?;
        let mut value = RealMatrix::<R, C>::zeros();
        for corner in neighborhood.corners() {
            let pixel = image.pixel_at(&corner.index);
            value += pixel.map(Into::<f64>::into) * corner.weight;
        }
        Ok(value)
    }
}

impl<'a, T: PixelComponent, const R: usize, const C: usize, const D: usize> Default
    for MatrixLinearInterpolator<'a, T, R, C, D>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: PixelComponent, const R: usize, const C: usize, const D: usize> ImageFunction<D>
    for MatrixLinearInterpolator<'a, T, R, C, D>
{
    type Output = RealMatrix<R, C>;

    fn evaluate(&self, point: &Point<D>) -> Result<Self::Output> {
        let image = self.bound_image()?;
        let index = image.transform_physical_point_to_continuous_index(point);
        Self::interpolate(image, &index)
    }

    fn evaluate_at_continuous_index(&self, index: &ContinuousIndex<D>) -> Result<Self::Output> {
        let image = self.bound_image()?;
        Self::interpolate(image, index)
    }

    fn evaluate_at_index(&self, index: &Index<D>) -> Result<Self::Output> {
        let image = self.bound_image()?;
        let pixel = image.get_pixel(index)?;
        Ok(pixel.map(Into::<f64>::into))
    }
}
