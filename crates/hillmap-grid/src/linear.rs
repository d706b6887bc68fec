//! Uniform rectangular sampling in the rotating frame.

use crate::bounds::Bounds;
use crate::grid::{check_shape, linspace_at, SampleGrid};
use hillmap_core::{DomainError, Point2};

/// Uniform, endpoint-inclusive sampling of a rectangle.
///
/// Column `c` samples `x = linspace(x_min, x_max, cols)[c]` and row `r`
/// samples `y = linspace(y_min, y_max, rows)[r]`.
///
/// # Examples
///
/// ```
/// use hillmap_grid::{Bounds, LinearGrid, SampleGrid};
///
/// let grid = LinearGrid::new(Bounds::square(2.0).unwrap(), 5, 3).unwrap();
/// assert_eq!(grid.cell_count(), 15);
/// assert_eq!(grid.position(0, 0).x, -2.0);
/// assert_eq!(grid.position(2, 4).y, 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGrid {
    bounds: Bounds,
    cols: usize,
    rows: usize,
}

impl LinearGrid {
    /// Create a grid of `cols × rows` samples spanning `bounds`.
    pub fn new(bounds: Bounds, cols: usize, rows: usize) -> Result<Self, DomainError> {
        check_shape(rows, cols)?;
        Ok(Self { bounds, cols, rows })
    }

    /// The sampled rectangle.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// x coordinate of column `col`.
    pub fn x_at(&self, col: usize) -> f64 {
        linspace_at(self.bounds.x_min(), self.bounds.x_max(), self.cols, col)
    }

    /// y coordinate of row `row`.
    pub fn y_at(&self, row: usize) -> f64 {
        linspace_at(self.bounds.y_min(), self.bounds.y_max(), self.rows, row)
    }

    /// Spacing between adjacent columns.
    pub fn dx(&self) -> f64 {
        self.bounds.width() / (self.cols - 1) as f64
    }

    /// Spacing between adjacent rows.
    pub fn dy(&self) -> f64 {
        self.bounds.height() / (self.rows - 1) as f64
    }

    /// The `(row, col)` whose sample is nearest to `p`, or `None` if `p`
    /// lies outside the bounds.
    pub fn nearest_cell(&self, p: Point2) -> Option<(usize, usize)> {
        if !self.bounds.contains(p) {
            return None;
        }
        let col = ((p.x - self.bounds.x_min()) / self.dx()).round() as usize;
        let row = ((p.y - self.bounds.y_min()) / self.dy()).round() as usize;
        Some((row.min(self.rows - 1), col.min(self.cols - 1)))
    }
}

impl SampleGrid for LinearGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn position(&self, row: usize, col: usize) -> Point2 {
        Point2::new(self.x_at(col), self.y_at(row))
    }

    fn descriptor(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 4 * 8 + 2 * 8);
        out.push(b'L');
        for v in [
            self.bounds.x_min(),
            self.bounds.x_max(),
            self.bounds.y_min(),
            self.bounds.y_max(),
        ] {
            out.extend_from_slice(&v.to_bits().to_le_bytes());
        }
        out.extend_from_slice(&(self.cols as u64).to_le_bytes());
        out.extend_from_slice(&(self.rows as u64).to_le_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use hillmap_core::Axis;
    use proptest::prelude::*;

    fn unit_grid(cols: usize, rows: usize) -> LinearGrid {
        LinearGrid::new(Bounds::new(0.0, 1.0, 0.0, 1.0).unwrap(), cols, rows).unwrap()
    }

    #[test]
    fn rejects_single_sample_axes() {
        let b = Bounds::square(1.0).unwrap();
        assert_eq!(
            LinearGrid::new(b, 1, 4),
            Err(DomainError::TooFewSamples {
                axis: Axis::X,
                count: 1
            })
        );
        assert!(LinearGrid::new(b, 4, 1).is_err());
    }

    #[test]
    fn corner_samples_are_exact() {
        let b = Bounds::new(-1.5, 1.7, -0.9, 0.9).unwrap();
        let g = LinearGrid::new(b, 2560, 1440).unwrap();
        assert_eq!(g.position(0, 0), Point2::new(-1.5, -0.9));
        assert_eq!(g.position(1439, 2559), Point2::new(1.7, 0.9));
    }

    #[test]
    fn spacing_matches_linspace() {
        let g = unit_grid(11, 5);
        assert!((g.dx() - 0.1).abs() < 1e-15);
        assert!((g.dy() - 0.25).abs() < 1e-15);
        assert!((g.x_at(3) - 0.3).abs() < 1e-15);
    }

    #[test]
    fn nearest_cell_rounds_and_rejects_outside() {
        let g = unit_grid(11, 11);
        assert_eq!(g.nearest_cell(Point2::new(0.31, 0.04)), Some((0, 3)));
        assert_eq!(g.nearest_cell(Point2::new(1.0, 1.0)), Some((10, 10)));
        assert_eq!(g.nearest_cell(Point2::new(1.2, 0.5)), None);
    }

    #[test]
    fn descriptor_distinguishes_shapes() {
        assert_ne!(unit_grid(4, 4).descriptor(), unit_grid(4, 5).descriptor());
        assert_eq!(unit_grid(4, 4).descriptor(), unit_grid(4, 4).descriptor());
    }

    #[test]
    fn compliance_small() {
        compliance::run_full_compliance(&unit_grid(7, 5));
    }

    #[test]
    fn compliance_minimal() {
        compliance::run_full_compliance(&unit_grid(2, 2));
    }

    proptest! {
        #[test]
        fn samples_stay_inside_bounds(
            cols in 2usize..40,
            rows in 2usize..40,
            x0 in -10.0f64..0.0, w in 0.01f64..10.0,
            y0 in -10.0f64..0.0, h in 0.01f64..10.0,
        ) {
            let b = Bounds::new(x0, x0 + w, y0, y0 + h).unwrap();
            let g = LinearGrid::new(b, cols, rows).unwrap();
            for i in 0..g.cell_count() {
                prop_assert!(b.contains(g.position_at(i)));
            }
        }

        #[test]
        fn x_is_monotone_along_row(cols in 2usize..64) {
            let g = unit_grid(cols, 2);
            for c in 1..cols {
                prop_assert!(g.x_at(c) > g.x_at(c - 1));
            }
        }
    }
}
