//! Frequency-domain plumbing: 2D transforms, complex spectra and quadrant centering.

mod center;
mod transform;

pub use center::center_quadrants;
pub use transform::{forward, forward_unscaled, inverse};

use ndarray::{Array2, Zip};
use rustfft::num_complex::Complex32;

use crate::error::{Error, Result};

/// Complex spectrum of a 2D real grid, indexed `[[row, col]]` in transform
/// frequency order (zero frequency at `[[0, 0]]`).
///
/// The real and imaginary planes live in the same cell, so they can never be
/// reordered independently of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    data: Array2<Complex32>,
}

impl Spectrum {
    /// Wrap an existing complex grid.
    #[must_use]
    pub const fn from_complex(data: Array2<Complex32>) -> Self {
        Self { data }
    }

    /// Promote a real plane to a spectrum with a zero imaginary plane.
    #[must_use]
    pub fn from_real(plane: &Array2<f32>) -> Self {
        Self {
            data: plane.mapv(|re| Complex32::new(re, 0.0)),
        }
    }

    /// Grid shape as `(rows, cols)`, i.e. `(height, width)`.
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Real plane.
    #[must_use]
    pub fn re(&self) -> Array2<f32> {
        self.data.mapv(|c| c.re)
    }

    /// Imaginary plane.
    #[must_use]
    pub fn im(&self) -> Array2<f32> {
        self.data.mapv(|c| c.im)
    }

    /// Borrow the underlying complex cells.
    #[must_use]
    pub const fn as_array(&self) -> &Array2<Complex32> {
        &self.data
    }

    /// Consume the spectrum, returning its complex cells.
    #[must_use]
    pub fn into_array(self) -> Array2<Complex32> {
        self.data
    }

    /// Cell-wise complex product `(a+bi)(c+di) = (ac−bd) + (ad+bc)i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the spectra differ in shape.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self> {
        if self.dim() != other.dim() {
            return Err(Error::shape_mismatch(self.dim(), other.dim()));
        }

        let data = Zip::from(&self.data)
            .and(&other.data)
            .map_collect(|&a, &b| {
                Complex32::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
            });

        Ok(Self { data })
    }

    /// `true` if no cell holds a NaN or infinite component.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.re.is_finite() && c.im.is_finite())
    }
}
