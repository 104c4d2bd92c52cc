use edgekit_image::{ImageError, Pixel, PixelMatrix, Point};

use super::ConvolutionFilter;
use crate::color::gray_from_rgba;

/// Adapter turning a [`ConvolutionFilter`] into a per-pixel matrix transform.
///
/// For every point it extracts the window of the filter's shape centered on the
/// point and applies the filter to it.
#[derive(Clone, Copy, Debug)]
pub struct FilterMapper<'a> {
    filter: &'a ConvolutionFilter,
}

impl<'a> FilterMapper<'a> {
    /// Create a new mapper borrowing the filter.
    pub fn new(filter: &'a ConvolutionFilter) -> Self {
        Self { filter }
    }

    /// Compute the filtered pixel at a point of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if the filter has an even width
    /// or height, since it has no center pixel.
    pub fn apply_at(&self, src: &PixelMatrix, point: Point) -> Result<Pixel, ImageError> {
        let window = src.window(point, self.filter.width(), self.filter.height())?;
        self.filter.apply(&window)
    }

    /// Apply the filter at every point of `src`, returning a new matrix.
    pub fn map(&self, src: &PixelMatrix) -> Result<PixelMatrix, ImageError> {
        src.try_map(|_, point, src| self.apply_at(src, point))
    }
}

/// Orientation of the edges to detect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Edges running top to bottom, found by differences along x.
    #[default]
    Vertical,
    /// Edges running left to right, found by differences along y.
    Horizontal,
}

impl EdgeDirection {
    /// Get the filter detecting edges of this orientation.
    pub fn filter(&self) -> ConvolutionFilter {
        match self {
            EdgeDirection::Vertical => ConvolutionFilter::vertical_edge(),
            EdgeDirection::Horizontal => ConvolutionFilter::horizontal_edge(),
        }
    }
}

impl std::fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EdgeDirection::Vertical => write!(f, "vertical"),
            EdgeDirection::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl std::str::FromStr for EdgeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vertical" | "v" => Ok(EdgeDirection::Vertical),
            "horizontal" | "h" => Ok(EdgeDirection::Horizontal),
            _ => Err(format!("Invalid edge direction: {s}")),
        }
    }
}

/// Detect edges in an RGBA matrix.
///
/// The matrix is converted to greyscale and the edge filter for `direction` is
/// applied at every pixel. Borders are handled by padding with empty pixels.
///
/// # Arguments
///
/// * `src` - The input RGBA matrix.
/// * `direction` - The orientation of the edges to detect.
///
/// # Returns
///
/// A new matrix of the same size with the edge response in the color channels
/// and a fully opaque alpha channel.
///
/// # Example
///
/// ```
/// use edgekit_image::{ColorProfile, PixelMatrix};
/// use edgekit_imgproc::filter::{detect_edges, EdgeDirection};
///
/// let image = PixelMatrix::new(4, 4, ColorProfile::Rgba, Some(vec![80; 4 * 4 * 4])).unwrap();
/// let edges = detect_edges(&image, EdgeDirection::Vertical).unwrap();
///
/// assert_eq!(edges.size(), image.size());
/// ```
pub fn detect_edges(src: &PixelMatrix, direction: EdgeDirection) -> Result<PixelMatrix, ImageError> {
    let filter = direction.filter();
    log::debug!(
        "detecting {} edges on {} with a {}x{} kernel",
        direction,
        src.size(),
        filter.width(),
        filter.height()
    );

    let gray = gray_from_rgba(src);
    FilterMapper::new(&filter).map(&gray)
}

/// Detect vertical edges in an RGBA matrix, see [`detect_edges`].
pub fn detect_vertical_edges(src: &PixelMatrix) -> Result<PixelMatrix, ImageError> {
    detect_edges(src, EdgeDirection::Vertical)
}

/// Detect horizontal edges in an RGBA matrix, see [`detect_edges`].
pub fn detect_horizontal_edges(src: &PixelMatrix) -> Result<PixelMatrix, ImageError> {
    detect_edges(src, EdgeDirection::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::{EdgeDirection, FilterMapper};
    use crate::filter::ConvolutionFilter;
    use edgekit_image::{ColorProfile, ImageError, Pixel, PixelMatrix, Point};

    #[test]
    fn edge_direction_from_str() {
        assert_eq!("vertical".parse::<EdgeDirection>(), Ok(EdgeDirection::Vertical));
        assert_eq!("H".parse::<EdgeDirection>(), Ok(EdgeDirection::Horizontal));
        assert!("diagonal".parse::<EdgeDirection>().is_err());
        assert_eq!(EdgeDirection::Horizontal.to_string(), "horizontal");
    }

    #[test]
    fn apply_at_pads_corner() -> Result<(), ImageError> {
        let src = PixelMatrix::new(3, 3, ColorProfile::Rgba, Some(vec![10; 36]))?;
        let filter = ConvolutionFilter::vertical_edge();
        let mapper = FilterMapper::new(&filter);

        // left column of the window is padding, right column is 10
        assert_eq!(
            mapper.apply_at(&src, Point::new(0, 0))?,
            Pixel::new(-20.0, -20.0, -20.0, 255.0)
        );
        // right column of the window is padding
        assert_eq!(
            mapper.apply_at(&src, Point::new(2, 1))?,
            Pixel::new(30.0, 30.0, 30.0, 255.0)
        );
        assert_eq!(
            mapper.apply_at(&src, Point::new(1, 1))?,
            Pixel::new(0.0, 0.0, 0.0, 255.0)
        );
        Ok(())
    }

    #[test]
    fn even_filter_cannot_be_mapped() -> Result<(), ImageError> {
        let src = PixelMatrix::new(3, 3, ColorProfile::Rgba, None)?;
        let filter = ConvolutionFilter::new(vec![vec![1.0, -1.0]])?;
        let res = FilterMapper::new(&filter).map(&src);
        assert_eq!(res, Err(ImageError::InvalidDimension(2, 1)));
        Ok(())
    }
}
