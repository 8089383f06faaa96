//! Scalar tensor image with physical metadata.
//!
//! The toolkit keeps scalar images as burn tensors. Matrix images are
//! assembled from one such image per matrix component.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use crate::image::index::Size;
use crate::image::metadata::ImageMetadata;

/// Scalar image backed by a burn tensor.
///
/// Tensor dimensions are stored in reverse axis order (`[Z, Y, X]` for a
/// volume), so `shape()[0]` is the extent of the slowest axis.
///
/// # Examples
/// ```rust
/// use lstk_core::image::{Image, ImageMetadata};
/// use burn::tensor::Tensor;
/// use burn_ndarray::NdArray;
///
/// type Backend = NdArray<f32>;
///
/// let device = Default::default();
/// let data = Tensor::<Backend, 2>::zeros([4, 6], &device);
/// let image = Image::new(data, ImageMetadata::default());
/// assert_eq!(image.size().0, [6, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Image<B: Backend, const D: usize> {
    data: Tensor<B, D>,
    metadata: ImageMetadata<D>,
}

impl<B: Backend, const D: usize> Image<B, D> {
    pub fn new(data: Tensor<B, D>, metadata: ImageMetadata<D>) -> Self {
        Self { data, metadata }
    }

    /// Get the image data tensor.
    pub fn data(&self) -> &Tensor<B, D> {
        &self.data
    }

    pub fn metadata(&self) -> &ImageMetadata<D> {
        &self.metadata
    }

    /// Tensor dimensions, slowest axis first.
    pub fn shape(&self) -> [usize; D] {
        self.data.dims()
    }

    /// Extent per image axis, axis 0 first.
    pub fn size(&self) -> Size<D> {
        let shape = self.shape();
        Size(std::array::from_fn(|axis| shape[D - 1 - axis]))
    }
}
