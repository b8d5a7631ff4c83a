//! Pixel-level transforms on RGBA buffers.

mod compare;
mod saturation;

pub use compare::compare_wipe;
pub use saturation::adjust_saturation;
