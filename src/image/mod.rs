//! Image decoding and saving utilities.

mod load;
mod save;

pub use load::{decode_image, load_image};
pub use save::save_image;

/// Number of channels in an RGBA pixel buffer.
pub const RGBA_CHANNELS: usize = 4;
