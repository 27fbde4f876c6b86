//! Wiener transfer function construction and spectral filtering.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::spectral::{self, Spectrum};

use super::psf::build_disk_psf;

/// Real-valued per-frequency gain, laid out in transform frequency order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    gain: Array2<f32>,
}

impl TransferFunction {
    /// Gain grid, indexed `[[row, col]]`.
    #[must_use]
    pub const fn gain(&self) -> &Array2<f32> {
        &self.gain
    }

    /// Grid shape as `(rows, cols)`.
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        self.gain.dim()
    }

    #[must_use]
    pub fn into_array(self) -> Array2<f32> {
        self.gain
    }
}

/// Build the Wiener transfer function `H / (|H|² + 1/snr)` for a disk blur.
///
/// `H` is the real plane of the unscaled transform of the centred disk PSF,
/// so `H` is 1 at zero frequency. Every gain is bounded by `sqrt(snr) / 2`.
///
/// # Arguments
///
/// * `size` - Grid size as `(width, height)`
/// * `radius` - Disk radius in pixels
/// * `snr` - Assumed signal-to-noise ratio, must be finite and positive
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for a bad `radius`, `snr` or empty
/// grid, and [`Error::NumericAnomaly`] if the spectrum turns non-finite.
pub fn build_wiener_filter(size: (usize, usize), radius: i32, snr: f32) -> Result<TransferFunction> {
    check_snr(snr)?;

    let psf = build_disk_psf(size, radius)?;
    let otf = spectral::forward_unscaled(&spectral::center_quadrants(&psf));
    if !otf.is_finite() {
        return Err(Error::NumericAnomaly {
            stage: "PSF spectrum",
        });
    }

    let noise = snr.recip();
    let gain = otf.re().mapv(|h| h / (h.abs().powi(2) + noise));
    if !gain.iter().all(|g| g.is_finite()) {
        return Err(Error::NumericAnomaly {
            stage: "Wiener transfer function",
        });
    }

    tracing::debug!(radius, snr, "built Wiener transfer function");
    Ok(TransferFunction { gain })
}

/// Filter `image` through `filter` in the frequency domain.
///
/// The output has the image's dimensions and is not clamped; values may fall
/// outside the input intensity range.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the filter was built for another
/// size and [`Error::NumericAnomaly`] if the image or result is not finite.
pub fn apply(image: &Array2<f32>, filter: &TransferFunction) -> Result<Array2<f32>> {
    if image.dim() != filter.dim() {
        return Err(Error::shape_mismatch(filter.dim(), image.dim()));
    }

    let image_spectrum = spectral::forward(image);
    if !image_spectrum.is_finite() {
        return Err(Error::NumericAnomaly {
            stage: "image spectrum",
        });
    }

    let filtered = image_spectrum.mul_elementwise(&Spectrum::from_real(filter.gain()))?;
    let restored = spectral::inverse(&filtered).re();
    if !restored.iter().all(|v| v.is_finite()) {
        return Err(Error::NumericAnomaly {
            stage: "restored image",
        });
    }

    Ok(restored)
}

pub(crate) fn check_snr(snr: f32) -> Result<()> {
    if !snr.is_finite() || snr <= 0.0 {
        return Err(Error::invalid(
            "snr",
            format!("must be finite and greater than 0, got {snr}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    /// Transform of the radius-1 disk (centre plus four neighbours, 0.2 each).
    #[allow(clippy::cast_precision_loss)]
    fn plus_sign_otf(rows: usize, cols: usize) -> Array2<f32> {
        Array2::from_shape_fn((rows, cols), |(v, u)| {
            let cu = (2.0 * PI * u as f32 / cols as f32).cos();
            let cv = (2.0 * PI * v as f32 / rows as f32).cos();
            0.2 * (1.0 + 2.0 * cu + 2.0 * cv)
        })
    }

    #[test]
    fn test_filter_matches_analytic_transform() {
        let snr = 100.0;
        let filter = build_wiener_filter((32, 16), 1, snr).unwrap();
        let expected = plus_sign_otf(16, 32).mapv(|h| h / (h * h + 1.0 / snr));

        for (got, want) in filter.gain().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3, "{got} vs {want}");
        }
    }

    #[test]
    fn test_filter_is_finite_and_bounded() {
        for snr in [0.01, 1.0, 50.0, 1000.0, 1200.0] {
            for radius in [0, 1, 4, 8, 16] {
                let filter = build_wiener_filter((64, 48), radius, snr).unwrap();
                let bound = snr.sqrt() / 2.0 * (1.0 + 1e-4);

                for &g in filter.gain() {
                    assert!(g.is_finite());
                    assert!(g.abs() <= bound, "snr {snr} radius {radius}: {g} > {bound}");
                }
            }
        }
    }

    #[test]
    fn test_dc_gain() {
        let snr = 1000.0;
        let filter = build_wiener_filter((64, 64), 8, snr).unwrap();
        let expected = 1.0 / (1.0 + 1.0 / snr);
        assert!((filter.gain()[[0, 0]] - expected).abs() < 1e-4);
    }

    #[test]
    fn test_gain_does_not_drop_as_snr_grows() {
        let snrs = [1.0, 10.0, 100.0, 1000.0, 2000.0];
        let filters: Vec<_> = snrs
            .iter()
            .map(|&snr| build_wiener_filter((32, 32), 1, snr).unwrap())
            .collect();

        for pair in filters.windows(2) {
            let (lower, higher) = (pair[0].gain(), pair[1].gain());
            assert!(higher[[0, 0]] >= lower[[0, 0]]);

            for (lo, hi) in lower.iter().zip(higher.iter()) {
                assert!(hi.abs() >= lo.abs() - 1e-6, "{hi} < {lo}");
            }
        }
    }

    #[test]
    fn test_radius_zero_is_flat_gain() {
        let snr = 4.0;
        let filter = build_wiener_filter((16, 8), 0, snr).unwrap();
        let expected = 1.0 / (1.0 + 1.0 / snr);
        assert!(filter.gain().iter().all(|g| (g - expected).abs() < 1e-6));
    }

    #[test]
    fn test_invalid_snr_rejected() {
        for snr in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let err = build_wiener_filter((16, 16), 3, snr).unwrap_err();
            assert!(
                matches!(err, Error::InvalidParameter { ref name, .. } if name == "snr"),
                "snr {snr} gave {err}"
            );
        }
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = build_wiener_filter((16, 16), -2, 100.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "radius"));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_apply_preserves_dimensions() {
        let image = Array2::from_shape_fn((24, 40), |(y, x)| (x + y) as f32);
        let filter = build_wiener_filter((40, 24), 3, 500.0).unwrap();

        let restored = apply(&image, &filter).unwrap();
        assert_eq!(restored.dim(), image.dim());
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_apply_with_point_kernel_scales_image() {
        let snr = 9.0;
        let image = Array2::from_shape_fn((8, 12), |(y, x)| (y * 12 + x) as f32);
        let filter = build_wiener_filter((12, 8), 0, snr).unwrap();

        let restored = apply(&image, &filter).unwrap();
        let gain = 1.0 / (1.0 + 1.0 / snr);
        for (r, i) in restored.iter().zip(image.iter()) {
            assert!((r - i * gain).abs() < 1e-3, "{r} vs {}", i * gain);
        }
    }

    #[test]
    fn test_apply_rejects_mismatched_filter() {
        let image = Array2::<f32>::zeros((32, 32));
        let filter = build_wiener_filter((16, 32), 2, 100.0).unwrap();

        assert!(matches!(
            apply(&image, &filter),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_apply_flags_non_finite_image() {
        let mut image = Array2::<f32>::ones((16, 16));
        image[[3, 7]] = f32::NAN;
        let filter = build_wiener_filter((16, 16), 2, 100.0).unwrap();

        assert!(matches!(
            apply(&image, &filter),
            Err(Error::NumericAnomaly { .. })
        ));
    }
}
