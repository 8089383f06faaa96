//! Dense N-dimensional image whose pixels are small fixed-size matrices.

use nalgebra::SMatrix;
use crate::error::{InterpolationError, Result};
use crate::image::index::{ContinuousIndex, Index, Size};
use crate::image::metadata::ImageMetadata;
use crate::spatial::Point;

/// Numeric scalar stored in matrix pixels.
///
/// Every component type converts losslessly to `f64`, which is the type
/// interpolation accumulates in.
pub trait PixelComponent: nalgebra::Scalar + Copy + Default + Into<f64> {}

impl<T> PixelComponent for T where T: nalgebra::Scalar + Copy + Default + Into<f64> {}

/// Matrix pixel with `R` rows and `C` columns.
pub type MatrixPixel<T, const R: usize, const C: usize> = SMatrix<T, R, C>;

/// Real-valued matrix produced by interpolation.
pub type RealMatrix<const R: usize, const C: usize> = SMatrix<f64, R, C>;

/// Image of `R x C` matrices over a `D`-dimensional grid.
///
/// Pixels are stored contiguously with axis 0 varying fastest.
///
/// # Examples
/// ```rust
/// use lstk_core::image::{ImageMetadata, Index, MatrixImage, Size};
/// use nalgebra::Matrix2;
///
/// let pixel = Matrix2::new(7i8, 9, 11, 13);
/// let image = MatrixImage::filled(Size::new([10, 10]), ImageMetadata::default(), pixel);
/// assert_eq!(image.get_pixel(&Index::new([4, 4])).unwrap(), &pixel);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixImage<T: PixelComponent, const R: usize, const C: usize, const D: usize> {
    size: Size<D>,
    metadata: ImageMetadata<D>,
    buffer: Vec<MatrixPixel<T, R, C>>,
}

impl<T: PixelComponent, const R: usize, const C: usize, const D: usize> MatrixImage<T, R, C, D> {
    /// Allocate an image with every component set to `T::default()`.
    pub fn new(size: Size<D>, metadata: ImageMetadata<D>) -> Self {
        Self::filled(size, metadata, MatrixPixel::from_element(T::default()))
    }

    /// Allocate an image with every pixel set to `pixel`.
    pub fn filled(size: Size<D>, metadata: ImageMetadata<D>, pixel: MatrixPixel<T, R, C>) -> Self {
        Self {
            size,
            metadata,
            buffer: vec![pixel; size.number_of_pixels()],
        }
    }

    /// Build an image from a buffer laid out with axis 0 fastest.
    ///
    /// # Errors
    /// `ShapeMismatch` if the buffer length differs from the pixel count.
    pub fn from_buffer(
        size: Size<D>,
        metadata: ImageMetadata<D>,
        buffer: Vec<MatrixPixel<T, R, C>>,
    ) -> Result<Self> {
        if buffer.len() != size.number_of_pixels() {
            return Err(InterpolationError::ShapeMismatch {
                expected: vec![size.number_of_pixels()],
                actual: vec![buffer.len()],
            });
        }
        Ok(Self {
            size,
            metadata,
            buffer,
        })
    }

    pub fn size(&self) -> &Size<D> {
        &self.size
    }

    pub fn metadata(&self) -> &ImageMetadata<D> {
        &self.metadata
    }

    /// All pixels in buffer order.
    pub fn pixels(&self) -> &[MatrixPixel<T, R, C>] {
        &self.buffer
    }

    /// Set every pixel to `pixel`.
    pub fn fill_buffer(&mut self, pixel: MatrixPixel<T, R, C>) {
        self.buffer.fill(pixel);
    }

    /// Bounds-checked pixel read.
    pub fn get_pixel(&self, index: &Index<D>) -> Result<&MatrixPixel<T, R, C>> {
        let offset = self.checked_offset(index)?;
        Ok(&self.buffer[offset])
    }

    /// Bounds-checked pixel write.
    pub fn set_pixel(&mut self, index: &Index<D>, pixel: MatrixPixel<T, R, C>) -> Result<()> {
        let offset = self.checked_offset(index)?;
        self.buffer[offset] = pixel;
        Ok(())
    }

    /// Pixel at an index the caller has already clamped into the grid.
    pub(crate) fn pixel_at(&self, index: &[usize; D]) -> &MatrixPixel<T, R, C> {
        &self.buffer[self.size.offset_unchecked(index)]
    }

    pub fn transform_physical_point_to_continuous_index(&self, point: &Point<D>) -> ContinuousIndex<D> {
        self.metadata.transform_physical_point_to_continuous_index(point)
    }

    pub fn transform_continuous_index_to_physical_point(&self, index: &ContinuousIndex<D>) -> Point<D> {
        self.metadata.transform_continuous_index_to_physical_point(index)
    }

    pub fn transform_index_to_physical_point(&self, index: &Index<D>) -> Point<D> {
        self.metadata.transform_index_to_physical_point(index)
    }

    fn checked_offset(&self, index: &Index<D>) -> Result<usize> {
        self.size
            .offset(index)
            .ok_or_else(|| InterpolationError::index_out_of_bounds(&index.0, &self.size.0))
    }
}
