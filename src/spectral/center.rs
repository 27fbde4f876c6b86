//! Diagonal quadrant swap between a grid's visual centre and its origin.

use ndarray::Array2;

/// Swap the quadrants of `grid` diagonally so the cell at
/// `(height / 2, width / 2)` moves to `[[0, 0]]`.
///
/// Quadrant boundaries sit at `width / 2` and `height / 2` (floor). For even
/// sizes this is the usual top-left ↔ bottom-right, top-right ↔ bottom-left
/// exchange and applying it twice is the identity. For odd sizes the
/// quadrants on either side of the boundary differ by one row or column and
/// the operation is not its own inverse.
#[must_use]
pub fn center_quadrants<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    let (cy, cx) = (rows / 2, cols / 2);

    Array2::from_shape_fn((rows, cols), |(y, x)| {
        grid[[(y + cy) % rows, (x + cx) % cols]].clone()
    })
}
