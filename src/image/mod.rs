//! Grayscale image loading and saving around the in-memory grids.
//!
//! Grids are `Array2<f32>` indexed `[[row, col]]` and hold raw 8-bit levels
//! (`0.0..=255.0`) when they come from a decoded file.

mod load;
mod save;

pub use load::{load_grayscale, luma_to_grid};
pub use save::{save_grayscale, to_display};

/// Largest intensity a displayable 8-bit grayscale sample can hold.
pub const MAX_LEVEL: f32 = 255.0;
