//! Forward and inverse 2D discrete Fourier transforms.
//!
//! The transform is separable: every row is transformed, then every column,
//! each with a 1D FFT planned by `rustfft` (mixed radix, so any length works).
//!
//! Scaling follows the `DFT_SCALE` convention: [`forward`] divides by
//! `width * height` and [`inverse`] is unscaled, so `inverse(forward(g))`
//! reproduces `g` without any further normalisation.

use ndarray::{Array2, Axis};
use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftDirection, FftPlanner};

use super::Spectrum;

/// Forward transform of a real grid, scaled by `1 / (width * height)`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn forward(grid: &Array2<f32>) -> Spectrum {
    let mut data = complex_plane(grid);
    fft2(&mut data, FftDirection::Forward);

    if !data.is_empty() {
        let scale = 1.0 / data.len() as f32;
        data.mapv_inplace(|c| c * scale);
    }

    Spectrum::from_complex(data)
}

/// Forward transform of a real grid without scaling.
///
/// Used for kernels, where the zero-frequency cell must equal the kernel sum.
#[must_use]
pub fn forward_unscaled(grid: &Array2<f32>) -> Spectrum {
    let mut data = complex_plane(grid);
    fft2(&mut data, FftDirection::Forward);
    Spectrum::from_complex(data)
}

/// Unscaled inverse transform. The spatial result is the real plane.
#[must_use]
pub fn inverse(spectrum: &Spectrum) -> Spectrum {
    let mut data = spectrum.as_array().clone();
    fft2(&mut data, FftDirection::Inverse);
    Spectrum::from_complex(data)
}

fn complex_plane(grid: &Array2<f32>) -> Array2<Complex32> {
    grid.mapv(|re| Complex32::new(re, 0.0))
}

fn fft2(data: &mut Array2<Complex32>, direction: FftDirection) {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return;
    }

    let mut planner = FftPlanner::<f32>::new();
    let row_fft = planner.plan_fft(cols, direction);
    let col_fft = planner.plan_fft(rows, direction);

    transform_lanes(data, Axis(1), row_fft.as_ref());
    transform_lanes(data, Axis(0), col_fft.as_ref());
}

/// Run `fft` over every 1D lane of `data` along `axis`.
fn transform_lanes(data: &mut Array2<Complex32>, axis: Axis, fft: &dyn Fft<f32>) {
    let mut buffer = vec![Complex32::default(); fft.len()];
    let mut scratch = vec![Complex32::default(); fft.get_inplace_scratch_len()];

    for mut lane in data.lanes_mut(axis) {
        buffer
            .iter_mut()
            .zip(lane.iter())
            .for_each(|(dst, src)| *dst = *src);

        fft.process_with_scratch(&mut buffer, &mut scratch);

        lane.iter_mut()
            .zip(&buffer)
            .for_each(|(dst, src)| *dst = *src);
    }
}
