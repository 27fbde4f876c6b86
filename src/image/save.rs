//! Image saving utilities.

use std::path::Path;

use image::{imageops::FilterType, GrayImage, Luma};
use ndarray::Array2;

use crate::error::{Error, Result};

use super::MAX_LEVEL;

/// Save an intensity grid as an 8-bit grayscale image file.
///
/// The grid is:
/// 1. Rounded and saturated into `0..=255`
/// 2. Resized by `scale` if it is not 1.0
/// 3. Saved to the specified path (format inferred from extension)
///
/// # Arguments
///
/// * `grid` - Intensity grid, any range
/// * `path` - Output file path
/// * `scale` - Resize factor applied to both sides
/// * `quality` - JPEG quality (1-100), ignored for other formats
///
/// # Errors
///
/// Returns an error if the image cannot be saved.
pub fn save_grayscale<P: AsRef<Path>>(
    grid: &Array2<f32>,
    path: P,
    scale: f32,
    quality: u8,
) -> Result<()> {
    let path = path.as_ref();

    let img = image::DynamicImage::ImageLuma8(to_display(grid, scale));

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let saved = match extension.as_deref() {
        Some("jpg" | "jpeg") => {
            let mut output = std::fs::File::create(path)?;
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality);
            img.write_with_encoder(encoder)
        }
        // No extension to infer a format from
        None => img.save_with_format(path, image::ImageFormat::Png),
        Some(_) => img.save(path),
    };

    saved.map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {}x{} image", img.width(), img.height());
    Ok(())
}

/// Convert an intensity grid to a displayable 8-bit image, resized by `scale`.
///
/// Samples below 0 or above 255 saturate; NaN becomes 0.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn to_display(grid: &Array2<f32>, scale: f32) -> GrayImage {
    let (rows, cols) = grid.dim();

    let img = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([saturate(grid[[y as usize, x as usize]])])
    });

    if (scale - 1.0).abs() < f32::EPSILON {
        return img;
    }

    let width = ((cols as f32 * scale).round() as u32).max(1);
    let height = ((rows as f32 * scale).round() as u32).max(1);
    image::imageops::resize(&img, width, height, FilterType::Triangle)
}

/// Round half to even and clamp into `0..=255`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturate(value: f32) -> u8 {
    // Safe: NaN casts to 0, everything else is clamped first
    value.round_ties_even().clamp(0.0, MAX_LEVEL) as u8
}
