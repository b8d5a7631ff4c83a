//! Image loading utilities.

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::source::ImageSource;

/// Fetch and decode an image from a source into an RGBA8 pixel buffer.
///
/// # Errors
///
/// Returns an error if the bytes cannot be fetched or decoded. On failure no
/// partial buffer is produced.
pub fn load_image(source: &ImageSource) -> Result<RgbaImage> {
    let bytes = source.fetch()?;
    decode_image(&bytes, &source.origin())
}

/// Decode encoded image bytes (PNG, JPEG, etc.) into an RGBA8 pixel buffer.
///
/// The format is guessed from the byte content; `origin` only labels errors.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
pub fn decode_image(bytes: &[u8], origin: &str) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|source| Error::ImageDecode {
        origin: origin.to_string(),
        source,
    })?;

    let rgba = img.to_rgba8();
    tracing::debug!(
        "Decoded {origin}: {}x{} pixels",
        rgba.width(),
        rgba.height()
    );

    Ok(rgba)
}
