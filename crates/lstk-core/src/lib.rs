pub mod error;
pub mod image;
pub mod spatial;
pub mod interpolation;

pub use error::{InterpolationError, Result};
pub use image::{ContinuousIndex, Image, ImageMetadata, Index, MatrixImage, RealMatrix, Size};
pub use interpolation::{ImageFunction, MatrixLinearInterpolator};
pub use spatial::{Direction, Point, Spacing, Vector};
