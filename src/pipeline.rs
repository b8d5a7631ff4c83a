//! Saturation adjustment pipeline: fetch, decode, transform, save.

use std::path::Path;

use crate::error::{Error, Result};
use crate::image::{load_image, save_image};
use crate::source::ImageSource;
use crate::transform::{adjust_saturation, compare_wipe};

/// Configuration for the saturation pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Saturation percentage (0-200). 100 leaves the image unchanged; values
    /// above 100 approach maximum saturation at 200.
    pub saturation: f32,

    /// Output JPEG quality (1-100). Ignored for lossless formats.
    pub output_quality: u8,

    /// When set, export a before/after comparison wipe split at this percent
    /// of the width (0-100) instead of the plain adjusted image.
    pub compare_split: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            saturation: 100.0,
            output_quality: 95,
            compare_split: None,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=200.0).contains(&self.saturation) {
            return Err(Error::InvalidParameter {
                name: "saturation".to_string(),
                reason: "must be between 0 and 200".to_string(),
            });
        }

        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::InvalidParameter {
                name: "output_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        if let Some(split) = self.compare_split {
            if !(0.0..=100.0).contains(&split) {
                return Err(Error::InvalidParameter {
                    name: "compare_split".to_string(),
                    reason: "must be between 0 and 100".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Main pipeline for adjusting image saturation.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load an image from `source`, adjust its saturation, and save it to
    /// `output_path`.
    ///
    /// The decoded original is retained and the transform runs on a copy, so
    /// the comparison export always pairs the untouched source frame with a
    /// single full recompute from it.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, transforming, or saving fails.
    pub fn process<P: AsRef<Path>>(&self, source: &ImageSource, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();

        tracing::info!("Loading image from {}", source.origin());
        let original = load_image(source)?;

        tracing::info!(
            "Adjusting saturation to {}% ({}x{} pixels)",
            self.config.saturation,
            original.width(),
            original.height()
        );
        let mut adjusted = original.clone();
        adjust_saturation(&mut adjusted, self.config.saturation)?;

        let output = if let Some(split) = self.config.compare_split {
            tracing::info!("Compositing comparison wipe at {split}%");
            compare_wipe(&original, &adjusted, split)?
        } else {
            adjusted
        };

        tracing::info!("Saving output to {}", output_path.display());
        save_image(&output, output_path, self.config.output_quality)?;

        tracing::info!("Processing complete");
        Ok(())
    }
}
