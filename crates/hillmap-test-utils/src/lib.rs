//! Test fixtures and assertions for hillmap development.
//!
//! Provides the standard systems and grids the integration tests and
//! benchmarks share, plus assertions over evaluated fields.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

use hillmap_field::PotentialField;

/// Panic unless every stored value of `field` is finite.
pub fn assert_all_finite(field: &PotentialField) {
    if let Some((i, v)) = field
        .values()
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        let (row, col) = field.row_col(i);
        panic!("cell ({row}, {col}) holds non-finite value {v}");
    }
}

/// Panic unless `|a - b| <= tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "expected {a} within {tol} of {b} (diff {})",
        (a - b).abs()
    );
}

/// Panic unless two fields hold bit-identical values and masks.
pub fn assert_fields_identical(a: &PotentialField, b: &PotentialField) {
    assert_eq!(a.shape(), b.shape(), "shape mismatch");
    for (i, (x, y)) in a.values().iter().zip(b.values()).enumerate() {
        assert_eq!(
            x.to_bits(),
            y.to_bits(),
            "cell {:?} differs: {x} vs {y}",
            a.row_col(i)
        );
    }
    assert_eq!(a.excluded_mask(), b.excluded_mask(), "exclusion masks differ");
}
