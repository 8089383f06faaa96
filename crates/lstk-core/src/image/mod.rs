//! Image grids and their physical metadata.
//!
//! [`MatrixImage`] is the grid consumed by the interpolators; [`Image`] is
//! the scalar tensor image it can be assembled from.

pub mod image;
pub mod index;
pub mod metadata;
pub mod matrix_image;
pub mod components;

pub use image::Image;
pub use index::{ContinuousIndex, Index, Size};
pub use metadata::ImageMetadata;
pub use matrix_image::{MatrixImage, MatrixPixel, PixelComponent, RealMatrix};
