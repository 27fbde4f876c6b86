//! Disk-shaped point-spread function for out-of-focus blur.

use ndarray::Array2;

use crate::error::{Error, Result};

/// Build a normalised disk PSF of the given `radius` on a `(width, height)` grid.
///
/// The disk is centred on `(width / 2, height / 2)`. A cell belongs to the
/// disk when its distance to the centre is at most `radius` (no edge
/// antialiasing), so `radius == 0` gives a single-point kernel. The kernel is
/// divided by its sum and cells outside the disk are exactly zero.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `radius` is negative or the grid
/// has no cells to hold the disk.
pub fn build_disk_psf(size: (usize, usize), radius: i32) -> Result<Array2<f32>> {
    check_radius(radius)?;

    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(Error::invalid(
            "size",
            format!("{width}x{height} grid leaves an empty PSF to normalise"),
        ));
    }

    let (cx, cy) = (width / 2, height / 2);
    let radius_sq = i64::from(radius).pow(2);

    let mut psf = Array2::from_shape_fn((height, width), |(y, x)| {
        let dx = offset(x, cx);
        let dy = offset(y, cy);
        if dx * dx + dy * dy <= radius_sq {
            1.0_f32
        } else {
            0.0
        }
    });

    let total: f32 = psf.sum();
    if total <= 0.0 {
        return Err(Error::invalid("radius", "disk covers no cells"));
    }
    psf.mapv_inplace(|v| v / total);

    tracing::debug!(width, height, radius, "built disk PSF");
    Ok(psf)
}

pub(crate) fn check_radius(radius: i32) -> Result<()> {
    if radius < 0 {
        return Err(Error::invalid(
            "radius",
            format!("must be non-negative, got {radius}"),
        ));
    }
    Ok(())
}

#[allow(clippy::cast_possible_wrap)]
fn offset(index: usize, center: usize) -> i64 {
    // Grid sides fit comfortably in i64
    index as i64 - center as i64
}
