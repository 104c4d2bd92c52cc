use std::path::Path;

use edgekit_image::{ColorProfile, PixelMatrix};

use crate::error::IoError;

/// Reads an image from the given file path as an RGBA matrix.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the decoded image to 8-bit RGBA. The decoded buffer is wrapped
/// by the matrix without copying.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A pixel matrix with the [`ColorProfile::Rgba`] profile.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<PixelMatrix, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();

    let matrix = PixelMatrix::new(
        width as usize,
        height as usize,
        ColorProfile::Rgba,
        Some(rgba.into_raw()),
    )?;

    Ok(matrix)
}

/// Writes an RGBA matrix to the given file path.
///
/// The file format is deduced from the path extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The matrix to encode.
pub fn write_image_rgba8(file_path: impl AsRef<Path>, image: &PixelMatrix) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let too_large = || IoError::ImageTooLarge(image.width(), image.height());
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    image::save_buffer(
        file_path,
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .map_err(IoError::ImageEncodeError)?;

    log::debug!("encoded {} ({}x{})", file_path.display(), width, height);

    Ok(())
}
