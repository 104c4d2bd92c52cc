/// A point in pixel coordinates.
///
/// Coordinates are signed so that neighbourhood lookups may probe past the
/// matrix borders; such points are simply out of bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column of the point.
    pub x: isize,
    /// Row of the point.
    pub y: isize,
}

impl Point {
    /// Create a new point from its coordinates.
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Offset the point by `rhs`, or `None` if a coordinate overflows.
    pub fn checked_add(self, rhs: Point) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single RGBA pixel value.
///
/// Channels hold values in the 0 to 255 range once read back from a matrix.
/// They are kept as `f32` so that intermediate results such as averages or
/// weighted sums can leave that range; they are clamped when stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
    /// Alpha channel.
    pub alpha: f32,
}

impl Pixel {
    /// Fully transparent black, used to pad windows past the matrix borders.
    pub const EMPTY: Pixel = Pixel::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new pixel from its channel values.
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build a pixel from the first four samples of an interleaved buffer.
    ///
    /// PRECONDITION: `samples` holds at least four values.
    pub(crate) fn from_samples(samples: &[u8]) -> Self {
        Self {
            red: samples[0] as f32,
            green: samples[1] as f32,
            blue: samples[2] as f32,
            alpha: samples[3] as f32,
        }
    }

    /// Write the clamped channel values into the first four samples of `samples`.
    pub(crate) fn write_samples(&self, samples: &mut [u8]) {
        samples[0] = clamp_sample(self.red);
        samples[1] = clamp_sample(self.green);
        samples[2] = clamp_sample(self.blue);
        samples[3] = clamp_sample(self.alpha);
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(samples: [u8; 4]) -> Self {
        Pixel::from_samples(&samples)
    }
}

/// Round and clamp a channel value into an 8-bit sample.
///
/// Ties round to even, matching a clamped 8-bit raster buffer. NaN maps to 0.
pub fn clamp_sample(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
