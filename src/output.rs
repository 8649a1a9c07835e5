use crate::error::{ProcessingError, Result};
use image::{DynamicImage, GrayImage, ImageFormat};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Picks the encoder for an output path from its extension.
pub fn output_format(output: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(output).map_err(|_| {
        ProcessingError::UnsupportedFormat(
            output
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_else(|| output.display().to_string()),
        )
    })
}

/// Writes `output` through a temporary file in the same directory, then
/// renames it into place. Readers never observe a partially written image,
/// and the temporary file is removed if `write` fails.
///
/// Returns the size of the file that was written.
pub fn write_atomically<F>(output: &Path, write: F) -> Result<u64>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|_| ProcessingError::DirectoryCreationFailed(parent.to_path_buf()))?;

    let mut temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    let file = temp.persist(output)?;
    Ok(file.metadata()?.len())
}

/// Encodes `img` in `format` and writes it atomically to `output`.
pub fn save_image(img: &DynamicImage, output: &Path, format: ImageFormat) -> Result<u64> {
    write_atomically(output, |writer| {
        img.write_to(writer, format)?;
        Ok(())
    })
}

/// Packs a two-tone gray image into 1-bit rows, most significant bit first,
/// each row padded to a whole byte. Nonzero pixels become 1 (white).
pub fn pack_bilevel(gray: &GrayImage) -> Vec<u8> {
    let width = gray.width() as usize;
    let stride = width.div_ceil(8);
    let mut packed = vec![0u8; stride * gray.height() as usize];
    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel.0[0] != 0 {
            let (x, y) = (x as usize, y as usize);
            packed[y * stride + x / 8] |= 0x80 >> (x % 8);
        }
    }
    packed
}

/// Writes a two-tone image as a 1-bit grayscale PNG.
pub fn save_bilevel_png(gray: &GrayImage, output: &Path) -> Result<u64> {
    let packed = pack_bilevel(gray);
    write_atomically(output, |writer| {
        let mut encoder = png::Encoder::new(writer, gray.width(), gray.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&packed)?;
        png_writer.finish()?;
        Ok(())
    })
}
