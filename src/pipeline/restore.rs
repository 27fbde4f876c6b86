//! Restoration entry points: the in-memory orchestrator and the file pipeline.

use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::image;

use super::psf::check_radius;
use super::wiener::{apply, build_wiener_filter, check_snr};

/// Blur model handed to [`restore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WienerParams {
    /// Disk radius of the defocus blur, in pixels.
    pub radius: i32,

    /// Assumed signal-to-noise ratio. Higher values trust the input more.
    pub snr: f32,
}

impl WienerParams {
    #[must_use]
    pub const fn new(radius: i32, snr: f32) -> Self {
        Self { radius, snr }
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or `snr` is not a finite
    /// positive number.
    pub fn validate(&self) -> Result<()> {
        check_radius(self.radius)?;
        check_snr(self.snr)
    }
}

/// Remove a disk blur of `params.radius` from `image`.
///
/// Builds the Wiener transfer function for the image size and applies it.
/// The result has the same dimensions as `image` and is not clamped.
///
/// # Errors
///
/// Returns any error raised while building or applying the filter.
pub fn restore(image: &Array2<f32>, params: WienerParams) -> Result<Array2<f32>> {
    let (rows, cols) = image.dim();
    let filter = build_wiener_filter((cols, rows), params.radius, params.snr)?;
    apply(image, &filter)
}

/// Configuration for the file-to-file deblurring pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Blur model.
    pub params: WienerParams,

    /// Resize factor applied to the saved output.
    pub output_scale: f32,

    /// Output JPEG quality (1-100).
    pub output_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: WienerParams::new(64, 1200.0),
            output_scale: 1.0,
            output_quality: 95,
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
        self.params.validate()?;

        if !self.output_scale.is_finite() || self.output_scale <= 0.0 {
            return Err(Error::invalid("output_scale", "must be greater than 0"));
        }

        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::invalid("output_quality", "must be between 1 and 100"));
        }

        Ok(())
    }
}

/// Loads a blurred image, restores it and writes the result.
///
/// Holds nothing but its configuration; every call starts from scratch.
#[derive(Debug, Clone)]
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
        tracing::info!("Initializing pipeline with config: {config:?}");
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Restore an in-memory image with the configured blur model.
    ///
    /// # Errors
    ///
    /// Returns an error if filtering fails.
    pub fn restore(&self, image: &Array2<f32>) -> Result<Array2<f32>> {
        restore(image, self.config.params)
    }

    /// Deblur an image file.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the blurred image
    /// * `output_path` - Path to save the restored image
    ///
    /// # Errors
    ///
    /// Returns an error if loading, filtering or saving fails.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Processing image: {}", input_path.display());
        let blurred = image::load_grayscale(input_path)?;

        tracing::info!(
            "Applying Wiener filter (radius {}, SNR {})...",
            self.config.params.radius,
            self.config.params.snr
        );
        let restored = self.restore(&blurred)?;

        tracing::info!("Saving output to: {}", output_path.display());
        image::save_grayscale(
            &restored,
            output_path,
            self.config.output_scale,
            self.config.output_quality,
        )?;

        tracing::info!("Processing complete");
        Ok(())
    }
}
