//! Closed-form effective potential and the sequential field evaluator.

use std::ops::Range;

use hillmap_core::{DomainError, Point2, TwoBodySystem};
use hillmap_grid::{check_shape, SampleGrid};

use crate::field::PotentialField;
use crate::guard::FiniteGuard;
use crate::policy::SingularityPolicy;

/// Effective potential at `p`, with no singularity handling.
///
/// Returns `-inf` exactly at a primary; prefer
/// [`potential_with_policy`] for anything that feeds a field.
pub fn effective_potential(system: &TwoBodySystem, p: Point2) -> f64 {
    let r1 = p.distance(system.primary());
    let r2 = p.distance(system.secondary());
    potential_from_distances(system, p, r1, r2)
}

/// Effective potential at `p` under `policy`.
///
/// Returns `None` if the policy excludes the point.
pub fn potential_with_policy(
    system: &TwoBodySystem,
    p: Point2,
    policy: SingularityPolicy,
) -> Option<f64> {
    let r1 = p.distance(system.primary());
    let r2 = p.distance(system.secondary());
    let (r1, r2) = policy.apply(r1, r2)?;
    Some(potential_from_distances(system, p, r1, r2))
}

#[inline]
fn potential_from_distances(system: &TwoBodySystem, p: Point2, r1: f64, r2: f64) -> f64 {
    let mu = system.mu();
    -(1.0 - mu) / r1 - mu / r2 - 0.5 * p.norm_sq()
}

/// Evaluate Φ over every cell of `grid`.
///
/// Fails fast, before computing anything, if the grid has fewer than
/// 2×2 samples or the policy radius is invalid. The returned field has
/// the grid's shape and contains no non-finite values.
///
/// # Examples
///
/// ```
/// use hillmap_core::TwoBodySystem;
/// use hillmap_field::{evaluate_potential, SingularityPolicy};
/// use hillmap_grid::{Bounds, LinearGrid};
///
/// let sys = TwoBodySystem::new(0.5).unwrap();
/// let grid = LinearGrid::new(Bounds::square(2.0).unwrap(), 100, 100).unwrap();
/// let field = evaluate_potential(&sys, &grid, SingularityPolicy::default()).unwrap();
/// assert_eq!(field.shape(), (100, 100));
/// assert!(field.values().iter().all(|v| v.is_finite()));
/// ```
pub fn evaluate_potential(
    system: &TwoBodySystem,
    grid: &dyn SampleGrid,
    policy: SingularityPolicy,
) -> Result<PotentialField, DomainError> {
    check_shape(grid.rows(), grid.cols())?;
    policy.validate()?;

    let band = evaluate_band(system, grid, policy, 0..grid.rows());
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        mu = system.mu(),
        guarded = band.guarded,
        "evaluated potential field"
    );
    Ok(PotentialField::from_parts(
        grid.rows(),
        grid.cols(),
        band.values,
        band.excluded,
        policy,
        band.guarded,
    ))
}

/// Values for a contiguous range of rows.
pub(crate) struct Band {
    pub(crate) rows: Range<usize>,
    pub(crate) values: Vec<f64>,
    pub(crate) excluded: Vec<bool>,
    pub(crate) guarded: usize,
}

/// Evaluate rows `rows` of `grid`. Shared by the sequential and the
/// parallel evaluator so both produce bit-identical cells.
pub(crate) fn evaluate_band(
    system: &TwoBodySystem,
    grid: &dyn SampleGrid,
    policy: SingularityPolicy,
    rows: Range<usize>,
) -> Band {
    let cols = grid.cols();
    let n = rows.len() * cols;
    let mut values = vec![0.0; n];
    let mut excluded = vec![false; n];
    let guarded = {
        let mut guard = FiniteGuard::new(&mut values, &mut excluded, rows.start * cols);
        for (local_row, row) in rows.clone().enumerate() {
            for col in 0..cols {
                let p = grid.position(row, col);
                guard.write(local_row * cols + col, potential_with_policy(system, p, policy));
            }
        }
        guard.caught()
    };
    Band {
        rows,
        values,
        excluded,
        guarded,
    }
}
