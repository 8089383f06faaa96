//! Conversion between matrix images and per-component scalar tensor images.

use burn::tensor::{Shape, Tensor, TensorData};
use burn::tensor::backend::Backend;
use crate::error::{InterpolationError, Result};
use crate::image::image::Image;
use crate::image::matrix_image::{MatrixImage, MatrixPixel, PixelComponent};

impl<const R: usize, const C: usize, const D: usize> MatrixImage<f32, R, C, D> {
    /// Assemble a matrix image from `R x C` scalar images.
    ///
    /// `components[row][col]` holds matrix entry `(row, col)` of every pixel.
    /// All components must share shape and metadata; the result takes the
    /// metadata of the first one.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the matrix is empty or shapes differ
    /// * `MetadataMismatch` if origin, spacing or direction differ
    /// * `Tensor` if tensor data cannot be read back as `f32`
    pub fn from_component_images<B: Backend>(components: &[[Image<B, D>; C]; R]) -> Result<Self> {
        let first = components
            .iter()
            .flatten()
            .next()
            .ok_or_else(|| InterpolationError::ShapeMismatch {
                expected: vec![1, 1],
                actual: vec![R, C],
            })?;
        let shape = first.shape();
        let size = first.size();
        let metadata = first.metadata().clone();

        let mut buffer = vec![MatrixPixel::<f32, R, C>::from_element(0.0); size.number_of_pixels()];
        for (row, row_images) in components.iter().enumerate() {
            for (col, component) in row_images.iter().enumerate() {
                if component.shape() != shape {
                    return Err(InterpolationError::ShapeMismatch {
                        expected: shape.to_vec(),
                        actual: component.shape().to_vec(),
                    });
                }
                if component.metadata() != &metadata {
                    return Err(InterpolationError::metadata_mismatch(format!(
                        "component ({}, {}) differs from component (0, 0)",
                        row, col
                    )));
                }
                let values = component
                    .data()
                    .clone()
                    .into_data()
                    .convert::<f32>()
                    .to_vec::<f32>()
                    .map_err(|e| InterpolationError::tensor(format!("{:?}", e)))?;
                for (pixel, value) in buffer.iter_mut().zip(values) {
                    pixel[(row, col)] = value;
                }
            }
        }

        tracing::debug!(size = ?size.0, rows = R, cols = C, "assembled matrix image from components");
        Self::from_buffer(size, metadata, buffer)
    }
}

impl<T: PixelComponent, const R: usize, const C: usize, const D: usize> MatrixImage<T, R, C, D> {
    /// Extract matrix entry `(row, col)` of every pixel as a scalar image.
    ///
    /// Values are converted to `f32` on the way into the tensor.
    ///
    /// # Panics
    /// If `row >= R` or `col >= C`.
    pub fn component_image<B: Backend>(&self, row: usize, col: usize, device: &B::Device) -> Image<B, D> {
        assert!(row < R && col < C, "Component ({}, {}) outside {}x{} matrix", row, col, R, C);
        let values: Vec<f32> = self
            .pixels()
            .iter()
            .map(|pixel| {
                let value: f64 = pixel[(row, col)].into();
                value as f32
            })
            .collect();
        let size = self.size();
        let dims: [usize; D] = std::array::from_fn(|i| size.0[D - 1 - i]);
        let data = Tensor::<B, D>::from_data(TensorData::new(values, Shape::new(dims)), device);
        Image::new(data, self.metadata().clone())
    }
}
