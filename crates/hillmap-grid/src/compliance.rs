//! SampleGrid trait compliance test helpers.
//!
//! These functions verify that a grid implementation satisfies the
//! invariants the field evaluator relies on. Reused across all layout
//! test modules (LinearGrid, LogPolarGrid).

use crate::grid::SampleGrid;
use indexmap::IndexSet;

/// Assert that the shape is at least 2×2 and `cell_count == rows * cols`.
pub fn assert_shape_consistent(grid: &dyn SampleGrid) {
    assert!(grid.rows() >= 2, "rows = {} < 2", grid.rows());
    assert!(grid.cols() >= 2, "cols = {} < 2", grid.cols());
    assert_eq!(grid.cell_count(), grid.rows() * grid.cols());
}

/// Assert that every sample position is finite.
pub fn assert_positions_finite(grid: &dyn SampleGrid) {
    for i in 0..grid.cell_count() {
        let p = grid.position_at(i);
        assert!(p.is_finite(), "cell {i} has non-finite position {p:?}");
    }
}

/// Assert that flat indexing agrees with `(row, col)` indexing.
pub fn assert_flat_index_row_major(grid: &dyn SampleGrid) {
    let cols = grid.cols();
    for r in 0..grid.rows() {
        for c in 0..cols {
            assert_eq!(
                grid.position(r, c),
                grid.position_at(r * cols + c),
                "flat index mismatch at ({r}, {c})"
            );
        }
    }
}

/// Assert that no two cells sample the same position.
pub fn assert_positions_distinct(grid: &dyn SampleGrid) {
    let mut seen = IndexSet::with_capacity(grid.cell_count());
    for i in 0..grid.cell_count() {
        let p = grid.position_at(i);
        let key = (p.x.to_bits(), p.y.to_bits());
        assert!(seen.insert(key), "cell {i} duplicates position {p:?}");
    }
}

/// Assert that sampling is a pure function of the grid.
pub fn assert_deterministic(grid: &dyn SampleGrid) {
    assert_eq!(grid.descriptor(), grid.descriptor());
    for i in 0..grid.cell_count() {
        assert_eq!(grid.position_at(i), grid.position_at(i));
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(grid: &dyn SampleGrid) {
    assert_shape_consistent(grid);
    assert_positions_finite(grid);
    assert_flat_index_row_major(grid);
    assert_positions_distinct(grid);
    assert_deterministic(grid);
}
