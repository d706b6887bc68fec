//! The core `SampleGrid` trait.

use hillmap_core::{Axis, DomainError, Point2};

/// A fixed, read-only lattice of sample positions.
///
/// Cells are addressed by `(row, col)` and flattened in row-major order:
/// `index = row * cols + col`. Row 0 holds the smallest y coordinate,
/// matching the orientation of a mathematical plot; renderers flip it.
///
/// `Sync` is required because field evaluation may fan rows out across
/// worker threads that all borrow the same grid.
pub trait SampleGrid: Send + Sync {
    /// Number of rows (samples along y).
    fn rows(&self) -> usize;

    /// Number of columns (samples along x).
    fn cols(&self) -> usize;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Position sampled by cell `(row, col)`.
    ///
    /// Callers must pass `row < rows()` and `col < cols()`.
    fn position(&self, row: usize, col: usize) -> Point2;

    /// Position sampled by the cell at flat index `index`.
    fn position_at(&self, index: usize) -> Point2 {
        let cols = self.cols();
        self.position(index / cols, index % cols)
    }

    /// Stable byte description of the layout. Two grids with equal
    /// descriptors sample the same positions.
    fn descriptor(&self) -> Vec<u8>;
}

/// Check that a grid shape has at least two samples on each axis.
pub fn check_shape(rows: usize, cols: usize) -> Result<(), DomainError> {
    if cols < 2 {
        return Err(DomainError::TooFewSamples {
            axis: Axis::X,
            count: cols,
        });
    }
    if rows < 2 {
        return Err(DomainError::TooFewSamples {
            axis: Axis::Y,
            count: rows,
        });
    }
    Ok(())
}

/// Endpoint-inclusive linear interpolation, the `linspace` rule:
/// sample `i` of `n` over `[lo, hi]`, with the last sample exactly `hi`.
pub(crate) fn linspace_at(lo: f64, hi: f64, n: usize, i: usize) -> f64 {
    if i + 1 == n {
        return hi;
    }
    lo + (hi - lo) * (i as f64) / ((n - 1) as f64)
}
