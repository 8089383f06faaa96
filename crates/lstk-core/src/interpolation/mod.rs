//! Interpolation of matrix-valued images.
//!
//! [`ImageFunction`] is the evaluation capability; [`MatrixLinearInterpolator`]
//! implements it with multilinear weights over the `2^D` surrounding pixels.

pub mod trait_;
pub mod neighborhood;
pub mod matrix_linear;

pub use trait_::ImageFunction;
pub use neighborhood::{Corner, LinearNeighborhood};
pub use matrix_linear::MatrixLinearInterpolator;
