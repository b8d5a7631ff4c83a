//! In-place saturation remapping of an RGBA pixel buffer.

use crate::error::{Error, Result};
use crate::image::RGBA_CHANNELS;

/// Adjust the saturation of a flat RGBA8 pixel buffer in place.
///
/// `saturation` is a percentage: 100 leaves the image unchanged, 0 fully
/// desaturates, and values from 100 up to 200 move each pixel's saturation
/// linearly toward its ceiling. Values outside [0, 200] are accepted and
/// extrapolated by the same formula; only the per-channel [0, 255] clamp
/// applies.
///
/// Per pixel, lightness is the mean of the max and min channel and the
/// current saturation ratio follows the HSL formula, both computed on the
/// raw 0-255 channel scale. The output depends on this exact scale; do not
/// normalize to [0, 1]. Pixels with r == g == b carry zero saturation and
/// pass through untouched. Alpha is never read or written.
///
/// # Errors
///
/// Returns [`Error::MalformedBuffer`] if the buffer length is not divisible
/// by 4. An empty buffer is a no-op.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn adjust_saturation(buffer: &mut [u8], saturation: f32) -> Result<()> {
    if buffer.len() % RGBA_CHANNELS != 0 {
        return Err(Error::MalformedBuffer { len: buffer.len() });
    }

    for pixel in buffer.chunks_exact_mut(RGBA_CHANNELS) {
        let r = f32::from(pixel[0]);
        let g = f32::from(pixel[1]);
        let b = f32::from(pixel[2]);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        // Achromatic pixel: no chroma to scale, and the only case where the
        // saturation ratio below would divide by zero.
        if max == min {
            continue;
        }

        let lightness = (max + min) / 2.0;
        let chroma = max - min;
        let s = if lightness > 127.5 {
            chroma / (2.0 - max - min)
        } else {
            chroma / (max + min)
        };

        let new_s = if saturation <= 100.0 {
            s * (saturation / 100.0)
        } else {
            // Interpolate from the current saturation toward a ceiling of 1,
            // reaching it as the parameter reaches 200.
            let t = (saturation - 100.0) / 100.0;
            (1.0 - s).mul_add(t, s)
        };

        let factor = new_s / s;

        for channel in &mut pixel[..3] {
            let value = (f32::from(*channel) - lightness).mul_add(factor, lightness);
            // Safe: clamped to [0, 255] before casting
            *channel = value.clamp(0.0, 255.0).round() as u8;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread(pixel: &[u8]) -> u8 {
        let max = pixel[..3].iter().copied().max().unwrap();
        let min = pixel[..3].iter().copied().min().unwrap();
        max - min
    }

    #[test]
    fn test_reference_pixel_at_half_saturation() {
        // (200,100,50): L=125, s=150/250=0.6; at 50% the factor is 0.5.
        let mut buffer = [200, 100, 50, 255];
        adjust_saturation(&mut buffer, 50.0).unwrap();
        assert_eq!(buffer, [163, 113, 88, 255]);
    }

    #[test]
    fn test_bright_pixel_at_half_saturation() {
        // Lightness above 127.5 takes the other HSL branch; the factor for
        // any saturation <= 100 still reduces to saturation/100.
        let mut buffer = [250, 220, 200, 255];
        adjust_saturation(&mut buffer, 50.0).unwrap();
        assert_eq!(buffer, [238, 223, 213, 255]);
    }

    #[test]
    fn test_identity_at_100() {
        let pixels: [[u8; 4]; 5] = [
            [200, 100, 50, 255],
            [0, 0, 255, 128],
            [250, 220, 200, 0],
            [1, 2, 3, 77],
            [255, 0, 0, 255],
        ];
        for pixel in pixels {
            let mut buffer = pixel;
            adjust_saturation(&mut buffer, 100.0).unwrap();
            assert_eq!(buffer, pixel);
        }
    }

    #[test]
    fn test_zero_saturation_collapses_to_lightness() {
        let mut buffer = [200, 100, 50, 255, 201, 100, 50, 9];
        adjust_saturation(&mut buffer, 0.0).unwrap();
        // L = 125 and 125.5 respectively, rounded to nearest.
        assert_eq!(buffer, [125, 125, 125, 255, 126, 126, 126, 9]);
    }

    #[test]
    fn test_achromatic_pixels_untouched() {
        for saturation in [0.0, 37.5, 100.0, 150.0, 200.0, 400.0] {
            let mut buffer = [128, 128, 128, 255, 0, 0, 0, 10, 255, 255, 255, 0];
            adjust_saturation(&mut buffer, saturation).unwrap();
            assert_eq!(buffer, [128, 128, 128, 255, 0, 0, 0, 10, 255, 255, 255, 0]);
        }
    }

    #[test]
    fn test_spread_monotone_below_100() {
        let mut previous = 0u8;
        for step in 0u8..=20 {
            let mut buffer = [200, 100, 50, 255];
            adjust_saturation(&mut buffer, f32::from(step) * 5.0).unwrap();
            assert!(spread(&buffer) >= previous);
            previous = spread(&buffer);
        }
    }

    #[test]
    fn test_spread_approaches_ceiling_above_100() {
        // For this pixel s is positive, so pushing toward newS = 1 widens the
        // spread monotonically; the clamp keeps every channel in range.
        let mut previous = 0u8;
        for step in 0u8..=10 {
            let mut buffer = [200, 100, 50, 255];
            adjust_saturation(&mut buffer, f32::from(step).mul_add(10.0, 100.0)).unwrap();
            assert!(spread(&buffer) >= previous);
            previous = spread(&buffer);
        }
        // At 200 the factor is 1/0.6: r and b hit the clamp bounds.
        let mut buffer = [200, 100, 50, 255];
        adjust_saturation(&mut buffer, 200.0).unwrap();
        assert_eq!(buffer, [250, 83, 0, 255]);
    }

    #[test]
    fn test_extrapolation_beyond_range_stays_clamped() {
        let mut buffer = [200, 100, 50, 255];
        adjust_saturation(&mut buffer, 1000.0).unwrap();
        // Nothing to assert beyond not panicking and alpha surviving: u8
        // storage plus the clamp guarantees the channel bound.
        assert_eq!(buffer[3], 255);

        let mut buffer = [200, 100, 50, 7];
        adjust_saturation(&mut buffer, -50.0).unwrap();
        assert_eq!(buffer[3], 7);
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut buffer: [u8; 0] = [];
        adjust_saturation(&mut buffer, 150.0).unwrap();
    }

    #[test]
    fn test_malformed_length_rejected() {
        let mut buffer = [1, 2, 3, 4, 5, 6];
        let err = adjust_saturation(&mut buffer, 100.0).unwrap_err();
        assert!(matches!(err, Error::MalformedBuffer { len: 6 }));
        // Rejected before any pixel is touched.
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6]);
    }
}
