use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{ProcessingError, Result};
use crate::loader::load_image;
use crate::output::write_atomically;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage};
use std::path::Path;
use tracing::{debug, info};

/// Reduces an image to a pixel layout the JPEG encoder accepts.
///
/// Gray sources stay single-channel, everything else becomes 8-bit RGB.
/// Alpha is discarded.
pub fn jpeg_compatible(img: &DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 => img.clone(),
        ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            DynamicImage::ImageLuma8(img.to_luma8())
        }
        ColorType::Rgb8 => img.clone(),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Encodes an already decoded image as JPEG at `quality` into `output_path`.
pub fn encode_jpeg(img: &DynamicImage, quality: u8, output_path: &Path) -> Result<u64> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ProcessingError::InvalidQuality(quality));
    }

    let img = jpeg_compatible(img);
    write_atomically(output_path, |writer| {
        let encoder = JpegEncoder::new_with_quality(writer, quality);
        img.write_with_encoder(encoder)?;
        Ok(())
    })
}

/// Re-encodes the image at `input_path` as JPEG with the given quality
/// (1-100) and writes it to `output_path`.
///
/// The output is always JPEG, whatever its extension. A source that cannot
/// be decoded is reported as an error and nothing is written.
///
/// Returns the size of the written file in bytes.
pub fn compress_image(input_path: &Path, quality: u8, output_path: &Path) -> Result<u64> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ProcessingError::InvalidQuality(quality));
    }

    let (img, original_size) = load_image(input_path)?;
    debug!(path = %input_path.display(), quality, "encoding jpeg");
    let size = encode_jpeg(&img, quality, output_path)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        quality,
        original_size,
        size,
        "compressed"
    );
    Ok(size)
}
