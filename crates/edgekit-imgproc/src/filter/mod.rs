//! Filter operations
//!
//! This module provides convolution filters for edge detection.

/// Filter kernels
pub mod kernels;

/// Convolution filter type
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
