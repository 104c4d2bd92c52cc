#![deny(missing_docs)]
//! Pixel matrix types for point indexed manipulation of RGBA images

/// Error types for the image module.
pub mod error;

/// Channel layout descriptions attached to a pixel matrix.
pub mod color_profile;

/// Pixel and point value types.
pub mod pixel;

/// Flat buffer backed pixel matrix.
pub mod matrix;

pub use crate::color_profile::ColorProfile;
pub use crate::error::ImageError;
pub use crate::matrix::{ImageSize, PixelMatrix};
pub use crate::pixel::{Pixel, Point};
