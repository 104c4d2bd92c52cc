/// Describes how the channels of a pixel are laid out in a matrix buffer.
///
/// Only the interleaved RGBA layout is supported. The profile is attached to a
/// matrix at construction and carried over to every matrix derived from it.
///
/// # Examples
///
/// ```
/// use edgekit_image::ColorProfile;
///
/// assert_eq!(ColorProfile::Rgba.num_channels(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColorProfile {
    /// Red, green, blue and alpha, one byte each.
    #[default]
    Rgba,
}

impl ColorProfile {
    /// Number of samples stored per pixel.
    pub fn num_channels(&self) -> usize {
        match self {
            ColorProfile::Rgba => 4,
        }
    }
}

impl std::fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ColorProfile::Rgba => write!(f, "RGBA"),
        }
    }
}
