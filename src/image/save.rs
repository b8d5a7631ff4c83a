//! Image saving utilities.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Save an RGBA8 pixel buffer to a file.
///
/// The format is inferred from the output extension. `jpg`/`jpeg` outputs go
/// through the JPEG encoder with the given quality (1-100) and drop the alpha
/// channel; everything else (PNG by default) is saved losslessly.
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written.
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();

    if is_jpeg_extension(path) {
        // JPEG has no alpha channel
        let rgb = image::DynamicImage::ImageRgba8(img.clone()).to_rgb8();
        let mut output = std::fs::File::create(path)?;
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality);
        rgb.write_with_encoder(encoder)
            .map_err(|source| Error::ImageSave {
                path: path.to_path_buf(),
                source,
            })?;
    } else {
        img.save(path).map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

/// Whether a path's extension selects the JPEG encoder.
fn is_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let ext = e.to_lowercase();
            ext == "jpg" || ext == "jpeg"
        })
}
