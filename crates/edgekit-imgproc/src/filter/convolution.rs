use edgekit_image::{ImageError, Pixel, PixelMatrix, Point};

use super::kernels;

/// A fixed 2D weight kernel applied to a window of the same shape.
///
/// Weights are indexed as `weights[y][x]` and stored row-major. Applying the
/// filter computes a weighted sum over the red channel of the window, which is
/// the single channel of a greyscale image.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvolutionFilter {
    weights: Vec<f32>,
    width: usize,
    height: usize,
}

impl ConvolutionFilter {
    /// Create a new filter from rows of weights.
    ///
    /// # Arguments
    ///
    /// * `weights` - The kernel rows, top to bottom. All rows must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if the kernel is empty and
    /// [`ImageError::InvalidArgument`] if the rows have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use edgekit_imgproc::filter::ConvolutionFilter;
    ///
    /// let filter = ConvolutionFilter::new(vec![vec![0.0, 1.0, 0.0]]).unwrap();
    ///
    /// assert_eq!(filter.width(), 3);
    /// assert_eq!(filter.height(), 1);
    /// ```
    pub fn new(weights: Vec<Vec<f32>>) -> Result<Self, ImageError> {
        let height = weights.len();
        let width = weights.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimension(width, height));
        }

        if let Some((row, len)) = weights
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(ImageError::InvalidArgument(format!(
                "kernel row {row} has {len} weights, expected {width}"
            )));
        }

        Ok(Self {
            weights: weights.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Create a new filter from a fixed size array of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if either dimension is zero.
    pub fn from_array<const W: usize, const H: usize>(
        weights: &[[f32; W]; H],
    ) -> Result<Self, ImageError> {
        if W == 0 || H == 0 {
            return Err(ImageError::InvalidDimension(W, H));
        }
        Ok(Self::from_rows(weights))
    }

    // PRECONDITION: W and H are non-zero
    fn from_rows<const W: usize, const H: usize>(weights: &[[f32; W]; H]) -> Self {
        Self {
            weights: weights.iter().flatten().copied().collect(),
            width: W,
            height: H,
        }
    }

    /// Filter responding to vertical edges, see [`kernels::VERTICAL_EDGE_KERNEL`].
    pub fn vertical_edge() -> Self {
        Self::from_rows(&kernels::VERTICAL_EDGE_KERNEL)
    }

    /// Filter responding to horizontal edges, see [`kernels::HORIZONTAL_EDGE_KERNEL`].
    pub fn horizontal_edge() -> Self {
        Self::from_rows(&kernels::HORIZONTAL_EDGE_KERNEL)
    }

    /// Get the width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the weight at a kernel position, or `None` outside the kernel.
    pub fn weight(&self, point: Point) -> Option<f32> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.weights[y * self.width + x])
    }

    /// Apply the filter to a window of the same shape.
    ///
    /// Computes the sum of `red * weight` over every position of the window and
    /// broadcasts it to the three color channels of an opaque pixel. The sum is
    /// returned as is; it is clamped when stored into a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::DimensionMismatch`] if the window and the filter
    /// have different shapes.
    ///
    /// # Example
    ///
    /// ```
    /// use edgekit_image::{ColorProfile, Pixel, PixelMatrix};
    /// use edgekit_imgproc::filter::ConvolutionFilter;
    ///
    /// let window = PixelMatrix::new(3, 3, ColorProfile::Rgba, Some(vec![50; 36])).unwrap();
    /// let pixel = ConvolutionFilter::vertical_edge().apply(&window).unwrap();
    ///
    /// assert_eq!(pixel, Pixel::new(0.0, 0.0, 0.0, 255.0));
    /// ```
    pub fn apply(&self, window: &PixelMatrix) -> Result<Pixel, ImageError> {
        if window.height() != self.height || window.width() != self.width {
            return Err(ImageError::DimensionMismatch(
                window.width(),
                window.height(),
                self.width,
                self.height,
            ));
        }

        // shapes match, so every window point has a weight
        let sum = window.fold(0.0f32, |sum, pixel, point| {
            sum + pixel.red * self.weight(point).unwrap_or_default()
        });

        Ok(Pixel {
            red: sum,
            green: sum,
            blue: sum,
            alpha: 255.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ConvolutionFilter;
    use edgekit_image::{ColorProfile, ImageError, Pixel, PixelMatrix, Point};

    fn window_from_reds(reds: &[u8], width: usize, height: usize) -> Result<PixelMatrix, ImageError> {
        let data = reds.iter().flat_map(|&r| [r, 7, 7, 3]).collect();
        PixelMatrix::new(width, height, ColorProfile::Rgba, Some(data))
    }

    #[test]
    fn filter_shape() -> Result<(), ImageError> {
        let filter = ConvolutionFilter::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
        assert_eq!(filter.width(), 3);
        assert_eq!(filter.height(), 2);
        assert_eq!(filter.weight(Point::new(2, 0)), Some(3.0));
        assert_eq!(filter.weight(Point::new(0, 1)), Some(4.0));
        assert_eq!(filter.weight(Point::new(3, 0)), None);
        assert_eq!(filter.weight(Point::new(0, -1)), None);
        Ok(())
    }

    #[test]
    fn filter_invalid_kernel() {
        assert_eq!(
            ConvolutionFilter::new(vec![]),
            Err(ImageError::InvalidDimension(0, 0))
        );
        assert_eq!(
            ConvolutionFilter::new(vec![vec![]]),
            Err(ImageError::InvalidDimension(0, 1))
        );
        assert_eq!(
            ConvolutionFilter::new(vec![vec![1.0, 0.0], vec![1.0]]),
            Err(ImageError::InvalidArgument(
                "kernel row 1 has 1 weights, expected 2".to_string()
            ))
        );
        assert_eq!(
            ConvolutionFilter::from_array::<0, 1>(&[[]]),
            Err(ImageError::InvalidDimension(0, 1))
        );
    }

    #[test]
    fn from_array_matches_new() -> Result<(), ImageError> {
        let a = ConvolutionFilter::from_array(&[[1.0, 0.0, -1.0]; 3])?;
        assert_eq!(a, ConvolutionFilter::vertical_edge());

        let b = ConvolutionFilter::new(vec![
            vec![1.0, 1.0, 1.0],
            vec![0.0, 0.0, 0.0],
            vec![-1.0, -1.0, -1.0],
        ])?;
        assert_eq!(b, ConvolutionFilter::horizontal_edge());
        Ok(())
    }

    #[test]
    fn apply_dimension_mismatch() -> Result<(), ImageError> {
        let filter = ConvolutionFilter::vertical_edge();

        let wide = window_from_reds(&[0; 5 * 3], 5, 3)?;
        assert_eq!(
            filter.apply(&wide),
            Err(ImageError::DimensionMismatch(5, 3, 3, 3))
        );

        let tall = window_from_reds(&[0; 3 * 5], 3, 5)?;
        assert_eq!(
            filter.apply(&tall),
            Err(ImageError::DimensionMismatch(3, 5, 3, 3))
        );
        Ok(())
    }

    #[test]
    fn apply_horizontal_edge() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let window = window_from_reds(&[
            10, 10, 10,
            99, 42, 7,
            0, 0, 0,
        ], 3, 3)?;
        let pixel = ConvolutionFilter::horizontal_edge().apply(&window)?;
        assert_eq!(pixel, Pixel::new(30.0, 30.0, 30.0, 255.0));
        Ok(())
    }

    #[test]
    fn apply_vertical_edge_flat_region() -> Result<(), ImageError> {
        let window = window_from_reds(&[50; 9], 3, 3)?;
        let pixel = ConvolutionFilter::vertical_edge().apply(&window)?;
        assert_eq!(pixel, Pixel::new(0.0, 0.0, 0.0, 255.0));
        Ok(())
    }

    #[test]
    fn apply_reads_red_only() -> Result<(), ImageError> {
        // green and blue differ wildly but only red contributes
        let data = [
            [0u8, 255, 255, 0],
            [0, 0, 0, 0],
            [100, 0, 255, 0],
        ]
        .iter()
        .flatten()
        .copied()
        .collect();
        let window = PixelMatrix::new(3, 1, ColorProfile::Rgba, Some(data))?;
        let filter = ConvolutionFilter::new(vec![vec![1.0, 0.0, -1.0]])?;
        assert_eq!(filter.apply(&window)?, Pixel::new(-100.0, -100.0, -100.0, 255.0));
        Ok(())
    }

    #[test]
    fn apply_uses_row_major_weights() -> Result<(), ImageError> {
        // weight(x, y) = 10 * y + x, window red = 1 only at (2, 0) and (0, 1)
        let filter = ConvolutionFilter::new(vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]])?;
        #[rustfmt::skip]
        let window = window_from_reds(&[
            0, 0, 1,
            1, 0, 0,
        ], 3, 2)?;
        assert_eq!(filter.apply(&window)?.red, 12.0);
        Ok(())
    }

    #[test]
    fn apply_result_is_clamped_on_store() -> Result<(), ImageError> {
        let window = window_from_reds(&[255, 0, 0, 255, 0, 0, 255, 0, 0], 3, 3)?;
        let pixel = ConvolutionFilter::vertical_edge().apply(&window)?;
        assert_eq!(pixel.red, 765.0);

        let mut dst = PixelMatrix::new(1, 1, ColorProfile::Rgba, None)?;
        dst.set(pixel, Point::new(0, 0))?;
        assert_eq!(dst.as_slice(), &[255, 255, 255, 255]);
        Ok(())
    }
}
