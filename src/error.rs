//! Custom error types for satura.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the satura library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an image file from disk.
    #[error("failed to read image from {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to fetch an image from a URL.
    #[error("failed to fetch image from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to decode image bytes into a pixel buffer.
    #[error("failed to decode image from {origin}: {source}")]
    ImageDecode {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A pixel buffer does not hold whole RGBA pixels.
    #[error("malformed pixel buffer: length {len} is not divisible by 4")]
    MalformedBuffer { len: usize },

    /// Two frames that must match in size do not.
    #[error("frame size mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for satura operations.
pub type Result<T> = std::result::Result<T, Error>;
