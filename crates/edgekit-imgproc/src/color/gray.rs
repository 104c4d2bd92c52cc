use edgekit_image::{Pixel, PixelMatrix};

/// Convert an RGBA pixel to greyscale using the plain channel average:
///
/// Y = (R + G + B) / 3
///
/// The alpha channel is preserved. The result is not rounded; rounding happens
/// when the pixel is stored into a matrix.
///
/// # Example
///
/// ```
/// use edgekit_image::Pixel;
/// use edgekit_imgproc::color::greyscale;
///
/// let grey = greyscale(Pixel::new(30.0, 60.0, 90.0, 200.0));
/// assert_eq!(grey, Pixel::new(60.0, 60.0, 60.0, 200.0));
/// ```
pub fn greyscale(pixel: Pixel) -> Pixel {
    let average = (pixel.red + pixel.green + pixel.blue) / 3.0;
    Pixel {
        red: average,
        green: average,
        blue: average,
        alpha: pixel.alpha,
    }
}

/// Convert an RGBA matrix to greyscale, returning a new matrix.
///
/// Every pixel goes through [`greyscale`]; the source is left untouched.
///
/// # Arguments
///
/// * `src` - The input RGBA matrix.
///
/// # Example
///
/// ```
/// use edgekit_image::{ColorProfile, PixelMatrix};
/// use edgekit_imgproc::color::gray_from_rgba;
///
/// let image = PixelMatrix::new(1, 1, ColorProfile::Rgba, Some(vec![0, 30, 60, 255])).unwrap();
/// let gray = gray_from_rgba(&image);
///
/// assert_eq!(gray.as_slice(), &[30, 30, 30, 255]);
/// ```
pub fn gray_from_rgba(src: &PixelMatrix) -> PixelMatrix {
    log::debug!("converting {} matrix to greyscale", src.size());
    src.map(|pixel, _, _| greyscale(pixel))
}
