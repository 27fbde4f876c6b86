//! Image loading utilities.

use std::path::Path;

use image::GrayImage;
use ndarray::Array2;

use crate::error::{Error, Result};

/// Load an image from disk as a single-channel intensity grid.
///
/// Colour inputs are reduced to luma. Samples keep their 8-bit levels, so the
/// grid holds values in `0.0..=255.0`.
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<f32>> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = luma_to_grid(&img.to_luma8());
    tracing::debug!("Loaded {}x{} grayscale image", grid.ncols(), grid.nrows());

    Ok(grid)
}

/// Convert an 8-bit grayscale buffer to an intensity grid.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn luma_to_grid(img: &GrayImage) -> Array2<f32> {
    let (width, height) = img.dimensions();

    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        // Safe: indices are bounded by the image's own u32 dimensions
        let pixel = img.get_pixel(x as u32, y as u32);
        f32::from(pixel[0])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_grid_shape_is_rows_by_cols() {
        let img = GrayImage::new(100, 40);
        let grid = luma_to_grid(&img);

        assert_eq!(grid.dim(), (40, 100));
    }

    #[test]
    fn test_levels_are_preserved() {
        let mut img = GrayImage::new(3, 2);
        img.put_pixel(2, 1, Luma([200]));
        img.put_pixel(0, 0, Luma([17]));

        let grid = luma_to_grid(&img);
        assert_eq!(grid[[1, 2]], 200.0);
        assert_eq!(grid[[0, 0]], 17.0);
        assert_eq!(grid[[0, 1]], 0.0);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_grayscale("/nonexistent/blurred.png").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
