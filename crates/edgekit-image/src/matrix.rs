use crate::color_profile::ColorProfile;
use crate::error::ImageError;
use crate::pixel::{Pixel, Point};

/// Image size in pixels
///
/// A struct to represent the size of a pixel matrix.
///
/// # Examples
///
/// ```
/// use edgekit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A width x height grid of pixels backed by a single flat sample buffer.
///
/// Samples are stored row-major with the channels of each pixel interleaved, so
/// the pixel at `(x, y)` starts at `y * width * channels + x * channels`. This is
/// the layout of a typical RGBA raster buffer, which can be wrapped directly.
///
/// The shape and color profile are fixed at construction. Content changes only
/// through [`PixelMatrix::set`]; [`PixelMatrix::map`] and
/// [`PixelMatrix::window`] always allocate a new matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    color_profile: ColorProfile,
    pixels: Vec<u8>,
}

impl PixelMatrix {
    /// Create a new pixel matrix.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the matrix in pixels.
    /// * `height` - The height of the matrix in pixels.
    /// * `color_profile` - The channel layout of the buffer.
    /// * `pixels` - The sample buffer to wrap, or `None` to allocate a zero-filled one.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if the width or height is zero, and
    /// [`ImageError::InvalidBufferLength`] if the supplied buffer does not hold
    /// exactly `width * height * channels` samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{ColorProfile, PixelMatrix};
    ///
    /// let matrix = PixelMatrix::new(10, 20, ColorProfile::Rgba, None).unwrap();
    ///
    /// assert_eq!(matrix.width(), 10);
    /// assert_eq!(matrix.height(), 20);
    /// assert_eq!(matrix.as_slice().len(), 10 * 20 * 4);
    /// ```
    pub fn new(
        width: usize,
        height: usize,
        color_profile: ColorProfile,
        pixels: Option<Vec<u8>>,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimension(width, height));
        }

        let expected = buffer_len(width, height, color_profile)
            .ok_or(ImageError::InvalidDimension(width, height))?;

        let pixels = match pixels {
            Some(pixels) if pixels.len() != expected => {
                return Err(ImageError::InvalidBufferLength(pixels.len(), expected));
            }
            Some(pixels) => pixels,
            None => vec![0u8; expected],
        };

        Ok(Self {
            width,
            height,
            color_profile,
            pixels,
        })
    }

    /// Create a zero-filled pixel matrix of the given size.
    pub fn from_size(size: ImageSize, color_profile: ColorProfile) -> Result<Self, ImageError> {
        Self::new(size.width, size.height, color_profile, None)
    }

    // PRECONDITION: buffer_len(width, height, color_profile) is Some
    fn blank(width: usize, height: usize, color_profile: ColorProfile) -> Self {
        Self {
            width,
            height,
            color_profile,
            pixels: vec![0u8; width * height * color_profile.num_channels()],
        }
    }

    /// Get the width of the matrix in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the matrix in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the size of the matrix in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the color profile of the matrix.
    pub fn color_profile(&self) -> ColorProfile {
        self.color_profile
    }

    /// Get the number of samples per pixel.
    pub fn num_channels(&self) -> usize {
        self.color_profile.num_channels()
    }

    /// Get the flat sample buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the flat sample buffer mutably.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the matrix and return its sample buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// Check whether a point lies inside the matrix.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && (point.x as usize) < self.width
            && point.y >= 0
            && (point.y as usize) < self.height
    }

    /// Compute the buffer offset of the first sample of a pixel.
    fn index(&self, point: Point) -> Result<usize, ImageError> {
        if !self.contains(point) {
            return Err(ImageError::OutOfBounds(
                point.x,
                point.y,
                self.width,
                self.height,
            ));
        }
        Ok(self.offset(point.x as usize, point.y as usize))
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        let channels = self.num_channels();
        y * self.width * channels + x * channels
    }

    #[inline]
    fn pixel_at(&self, x: usize, y: usize) -> Pixel {
        let i = self.offset(x, y);
        Pixel::from_samples(&self.pixels[i..i + self.num_channels()])
    }

    #[inline]
    fn store(&mut self, x: usize, y: usize, pixel: &Pixel) {
        let i = self.offset(x, y);
        let channels = self.num_channels();
        pixel.write_samples(&mut self.pixels[i..i + channels]);
    }

    /// Get the pixel at a point, or `None` if the point is outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{ColorProfile, Pixel, PixelMatrix, Point};
    ///
    /// let matrix = PixelMatrix::new(1, 1, ColorProfile::Rgba, Some(vec![1, 2, 3, 4])).unwrap();
    ///
    /// assert_eq!(matrix.get(Point::new(0, 0)), Some(Pixel::new(1.0, 2.0, 3.0, 4.0)));
    /// assert_eq!(matrix.get(Point::new(-1, 0)), None);
    /// ```
    pub fn get(&self, point: Point) -> Option<Pixel> {
        let i = self.index(point).ok()?;
        Some(Pixel::from_samples(&self.pixels[i..i + self.num_channels()]))
    }

    /// Write a pixel at a point.
    ///
    /// Channel values are rounded and clamped to the 0 to 255 sample range.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::OutOfBounds`] if the point is outside the matrix, in
    /// which case the buffer is left untouched.
    pub fn set(&mut self, pixel: Pixel, point: Point) -> Result<(), ImageError> {
        let i = self.index(point)?;
        let channels = self.num_channels();
        pixel.write_samples(&mut self.pixels[i..i + channels]);
        Ok(())
    }

    /// Visit every pixel in row-major order.
    ///
    /// The visitor receives the pixel, its point and the matrix itself so that
    /// neighbouring pixels can be looked up.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Pixel, Point, &PixelMatrix),
    {
        for y in 0..self.height {
            for x in 0..self.width {
                f(
                    self.pixel_at(x, y),
                    Point::new(x as isize, y as isize),
                    self,
                );
            }
        }
    }

    /// Transform every pixel into a new matrix of the same shape and profile.
    ///
    /// The source matrix is only read; the transform may look up any of its
    /// pixels through the third argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{ColorProfile, Pixel, PixelMatrix};
    ///
    /// let matrix = PixelMatrix::new(2, 1, ColorProfile::Rgba, Some(vec![10; 8])).unwrap();
    /// let brighter = matrix.map(|p, _, _| Pixel { red: p.red * 2.0, ..p });
    ///
    /// assert_eq!(brighter.as_slice(), &[20, 10, 10, 10, 20, 10, 10, 10]);
    /// assert_eq!(matrix.as_slice(), &[10; 8]);
    /// ```
    pub fn map<F>(&self, mut f: F) -> PixelMatrix
    where
        F: FnMut(Pixel, Point, &PixelMatrix) -> Pixel,
    {
        let mut dst = Self::blank(self.width, self.height, self.color_profile);
        for y in 0..self.height {
            for x in 0..self.width {
                let pixel = f(
                    self.pixel_at(x, y),
                    Point::new(x as isize, y as isize),
                    self,
                );
                dst.store(x, y, &pixel);
            }
        }
        dst
    }

    /// Fallible version of [`PixelMatrix::map`].
    ///
    /// Stops at the first error returned by the transform and propagates it.
    pub fn try_map<F, E>(&self, mut f: F) -> Result<PixelMatrix, E>
    where
        F: FnMut(Pixel, Point, &PixelMatrix) -> Result<Pixel, E>,
    {
        let mut dst = Self::blank(self.width, self.height, self.color_profile);
        for y in 0..self.height {
            for x in 0..self.width {
                let pixel = f(
                    self.pixel_at(x, y),
                    Point::new(x as isize, y as isize),
                    self,
                )?;
                dst.store(x, y, &pixel);
            }
        }
        Ok(dst)
    }

    /// Fold over every pixel in row-major order starting from `init`.
    pub fn fold<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, Pixel, Point) -> T,
    {
        let mut acc = init;
        for y in 0..self.height {
            for x in 0..self.width {
                acc = f(acc, self.pixel_at(x, y), Point::new(x as isize, y as isize));
            }
        }
        acc
    }

    /// Reduce every pixel in row-major order into a single value.
    ///
    /// Unlike [`PixelMatrix::fold`] the seed is optional at the call site, and a
    /// missing seed is an error rather than an implicit first element.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidArgument`] if `init` is `None`.
    pub fn reduce<T, F>(&self, f: F, init: Option<T>) -> Result<T, ImageError>
    where
        F: FnMut(T, Pixel, Point) -> T,
    {
        let init = init.ok_or_else(|| {
            ImageError::InvalidArgument("reduce requires an initial value".to_string())
        })?;
        Ok(self.fold(init, f))
    }

    /// Extract an odd sized window centered on a point.
    ///
    /// Positions of the window that fall outside the source matrix are filled
    /// with [`Pixel::EMPTY`]. The center pixel of the window sits at
    /// `((width - 1) / 2, (height - 1) / 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if `width` or `height` is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgekit_image::{ColorProfile, Pixel, PixelMatrix, Point};
    ///
    /// let matrix = PixelMatrix::new(2, 2, ColorProfile::Rgba, Some(vec![255; 16])).unwrap();
    /// let window = matrix.window(Point::new(0, 0), 3, 3).unwrap();
    ///
    /// assert_eq!(window.get(Point::new(1, 1)), Some(Pixel::new(255.0, 255.0, 255.0, 255.0)));
    /// assert_eq!(window.get(Point::new(0, 0)), Some(Pixel::EMPTY));
    /// ```
    pub fn window(
        &self,
        center: Point,
        width: usize,
        height: usize,
    ) -> Result<PixelMatrix, ImageError> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(ImageError::InvalidDimension(width, height));
        }
        if buffer_len(width, height, self.color_profile).is_none() {
            return Err(ImageError::InvalidDimension(width, height));
        }

        let x_radius = ((width - 1) / 2) as isize;
        let y_radius = ((height - 1) / 2) as isize;

        let mut dst = Self::blank(width, height, self.color_profile);
        for dy in -y_radius..=y_radius {
            for dx in -x_radius..=x_radius {
                // overflowing coordinates are out of bounds too
                let pixel = center
                    .checked_add(Point::new(dx, dy))
                    .and_then(|p| self.get(p))
                    .unwrap_or(Pixel::EMPTY);
                dst.store((dx + x_radius) as usize, (dy + y_radius) as usize, &pixel);
            }
        }

        Ok(dst)
    }
}

/// Number of samples of a `width` x `height` buffer, or `None` on overflow.
fn buffer_len(width: usize, height: usize, color_profile: ColorProfile) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(color_profile.num_channels())
}
