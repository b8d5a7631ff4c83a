//! Before/after comparison wipe.

use image::RgbaImage;

use crate::error::{Error, Result};

/// Composite two frames of equal size into a single comparison image.
///
/// Columns left of the split show `original`, columns at or right of it show
/// `adjusted`. `split` is a percentage of the width in [0, 100]: 0 shows only
/// the adjusted frame, 100 only the original.
///
/// # Errors
///
/// Returns an error if the frames differ in size or `split` is out of range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compare_wipe(original: &RgbaImage, adjusted: &RgbaImage, split: f32) -> Result<RgbaImage> {
    if original.dimensions() != adjusted.dimensions() {
        return Err(Error::DimensionMismatch {
            expected_width: original.width(),
            expected_height: original.height(),
            width: adjusted.width(),
            height: adjusted.height(),
        });
    }

    if !(0.0..=100.0).contains(&split) {
        return Err(Error::InvalidParameter {
            name: "split".to_string(),
            reason: "must be between 0 and 100".to_string(),
        });
    }

    // Safe: split/100 is in [0, 1], so the column index stays within width
    #[allow(clippy::cast_precision_loss)]
    let boundary = (original.width() as f32 * split / 100.0).round() as u32;

    let mut composite = adjusted.clone();
    for (x, y, pixel) in composite.enumerate_pixels_mut() {
        if x < boundary {
            *pixel = *original.get_pixel(x, y);
        }
    }

    Ok(composite)
}
