/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when a width or height is zero, or even where an odd size is required.
    #[error("Invalid dimension ({0}, {1})")]
    InvalidDimension(usize, usize),

    /// Error when a write addresses a point outside the matrix.
    #[error("Point ({0}, {1}) is out of bounds for a matrix of size ({2}, {3})")]
    OutOfBounds(isize, isize, usize, usize),

    /// Error when a filter is applied to a window of a different shape.
    #[error("Window size ({0}, {1}) does not match the filter size ({2}, {3})")]
    DimensionMismatch(usize, usize, usize, usize),

    /// Error when a required argument is missing or invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error when the supplied buffer does not match the matrix size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidBufferLength(usize, usize),
}
