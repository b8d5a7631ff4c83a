//! # satura
//!
//! A library for adjusting the color saturation of images.
//!
//! The saturation parameter is a percentage from 0 to 200: 100 leaves the
//! image unchanged, 0 fully desaturates it, and values above 100 push each
//! pixel linearly toward maximum saturation. The remap works per pixel on
//! an HSL-derived saturation ratio and runs in place on a flat RGBA buffer.
//!
//! ## Example
//!
//! ```no_run
//! use satura::{Config, ImageSource, Pipeline};
//!
//! # fn main() -> satura::Result<()> {
//! let config = Config {
//!     saturation: 150.0,
//!     ..Config::default()
//! };
//! let pipeline = Pipeline::new(config)?;
//!
//! pipeline.process(&ImageSource::parse("photo.jpg"), "vivid.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;
pub mod source;
pub mod transform;

pub use error::{Error, Result};
pub use pipeline::{Config, Pipeline};
pub use source::ImageSource;
pub use transform::{adjust_saturation, compare_wipe};
