//! Black-and-white conversion with a fixed global threshold.
//!
//! Gray levels use the BT.601 weights (0.299, 0.587, 0.114) in 14-bit fixed
//! point, the same transform common computer-vision libraries apply for
//! RGB to gray. Pure gray pixels keep their value exactly.

use crate::constants::{BLACK, LUMA_B, LUMA_G, LUMA_R, LUMA_SHIFT, WHITE};
use crate::error::Result;
use crate::loader::load_image;
use crate::output::{output_format, save_bilevel_png, save_image};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use std::path::Path;
use tracing::{debug, info};

/// BT.601 luma of an 8-bit RGB triple, rounded to nearest.
#[inline]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b);
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Converts any decoded image to single-channel 8-bit gray. Alpha is dropped.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    if let DynamicImage::ImageLuma8(gray) = img {
        return gray.clone();
    }
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma_bt601(r, g, b)])
    })
}

/// Applies a binary threshold in place: values above `threshold` become
/// white, everything else black.
pub fn binarize(gray: &mut GrayImage, threshold: u8) {
    for pixel in gray.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > threshold { WHITE } else { BLACK };
    }
}

/// Grayscale then threshold, returning a strict two-tone image.
pub fn threshold_image(img: &DynamicImage, threshold: u8) -> GrayImage {
    let mut gray = to_grayscale(img);
    binarize(&mut gray, threshold);
    gray
}

/// Converts the image at `input_path` to black and white and writes it to
/// `output_path`, in the format named by the output extension.
///
/// The result has the input's dimensions and only the values 0 and 255.
/// PNG output is stored at 1 bit per pixel, other formats as 8-bit gray.
/// It is written through a temporary file and renamed over any existing
/// output. No source metadata (DPI, compression tags) is carried over.
///
/// Returns the size of the written file in bytes.
pub fn convert_to_black_and_white(
    input_path: &Path,
    threshold: u8,
    output_path: &Path,
) -> Result<u64> {
    let format = output_format(output_path)?;
    let (img, _) = load_image(input_path)?;

    debug!(path = %input_path.display(), threshold, "thresholding");
    let bw = threshold_image(&img, threshold);
    // Only PNG gets a 1-bit encoding; the other encoders take 8-bit gray.
    let size = match format {
        ImageFormat::Png => save_bilevel_png(&bw, output_path)?,
        _ => save_image(&DynamicImage::ImageLuma8(bw), output_path, format)?,
    };

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        threshold,
        size,
        "converted to black and white"
    );
    Ok(size)
}
