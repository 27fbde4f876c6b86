//! Custom error types for wiener-deblur.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the wiener-deblur library.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Two grids that must be co-indexed have different shapes.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// A grid picked up NaN or infinite values.
    #[error("non-finite values in {stage}")]
    NumericAnomaly { stage: &'static str },

    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
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

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.1, expected.0),
            actual: format!("{}x{}", actual.1, actual.0),
        }
    }
}

/// Result type alias for wiener-deblur operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_reports_width_by_height() {
        let err = Error::shape_mismatch((4, 8), (2, 3));
        assert_eq!(err.to_string(), "dimension mismatch: expected 8x4, got 3x2");
    }
}
