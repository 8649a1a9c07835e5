use crate::constants::{MAX_FILE_SIZE, MAX_IMAGE_DIMENSION};
use crate::error::{ProcessingError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Validates that a file exists at the given path.
///
/// # Example
/// ```
/// use std::path::Path;
/// use img_mono::validate_file_exists;
///
/// let result = validate_file_exists(Path::new("nonexistent.png"));
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(ProcessingError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Loads an image file and returns it along with its size on disk.
///
/// The decoder is picked from the file content, falling back to the
/// extension, so a PNG saved as `.jpg` still decodes.
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded bitmap and the file size in bytes
/// * `Err(ProcessingError)` - If the file is missing, over the size or
///   dimension limits, or cannot be decoded
pub fn load_image(input_path: &Path) -> Result<(DynamicImage, u64)> {
    validate_file_exists(input_path)?;

    // Size check happens before decoding so oversized files are never read.
    let file_size = fs::metadata(input_path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(ProcessingError::FileTooLarge(file_size, MAX_FILE_SIZE));
    }

    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    let (width, height) = img.dimensions();
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(ProcessingError::InvalidDimensions(
            width,
            height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    debug!(
        path = %input_path.display(),
        width,
        height,
        color = ?img.color(),
        file_size,
        "image loaded"
    );
    Ok((img, file_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_load_image_not_found() {
        let result = load_image(Path::new("nonexistent.png"));
        assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
    }

    #[test]
    fn test_load_image_directory_is_not_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_image(temp_dir.path());
        assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
    }

    #[test]
    fn test_load_image_reports_size_and_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rgb.png");
        RgbImage::from_pixel(7, 5, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let (img, size) = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (7, 5));
        assert_eq!(size, fs::metadata(&path).unwrap().len());
    }

    #[test]
    fn test_load_image_guesses_format_from_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("actually_png.jpg");
        RgbImage::new(3, 3)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        assert!(load_image(&path).is_ok());
    }

    #[test]
    fn test_load_image_corrupt_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"fake image data").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(ProcessingError::Image(_))));
    }
}
