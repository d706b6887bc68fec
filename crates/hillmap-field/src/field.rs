//! The evaluated scalar field.

use hillmap_core::DomainError;

use crate::guard::check_finite;
use crate::policy::SingularityPolicy;

/// A scalar potential value per grid cell, plus an exclusion flag.
///
/// Same shape as the grid it was evaluated over, flattened row-major.
/// Every stored value is finite. Excluded cells hold
/// [`EXCLUDED_SENTINEL`](crate::EXCLUDED_SENTINEL) and should be skipped
/// by consumers that honour the mask.
#[derive(Clone, Debug, PartialEq)]
pub struct PotentialField {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
    excluded: Vec<bool>,
    policy: SingularityPolicy,
    guarded: usize,
}

impl PotentialField {
    /// Assemble a field from evaluated buffers.
    ///
    /// `guarded` counts cells the finite guard had to exclude.
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        values: Vec<f64>,
        excluded: Vec<bool>,
        policy: SingularityPolicy,
        guarded: usize,
    ) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        debug_assert_eq!(excluded.len(), rows * cols);
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self {
            rows,
            cols,
            values,
            excluded,
            policy,
            guarded,
        }
    }

    /// Build a field from raw values, e.g. a precomputed map.
    ///
    /// Non-finite values are rejected rather than flagged: callers that
    /// bring their own data are expected to bring finite data.
    pub fn from_values(
        rows: usize,
        cols: usize,
        values: Vec<f64>,
        excluded: Vec<bool>,
    ) -> Result<Self, DomainError> {
        hillmap_grid::check_shape(rows, cols)?;
        if values.len() != rows * cols || excluded.len() != rows * cols {
            return Err(DomainError::InvalidParameter {
                name: "values",
                reason: format!(
                    "expected {} cells, got {} values and {} flags",
                    rows * cols,
                    values.len(),
                    excluded.len()
                ),
            });
        }
        for (i, &v) in values.iter().enumerate() {
            check_finite(i, v).map_err(|e| DomainError::InvalidParameter {
                name: "values",
                reason: e.to_string(),
            })?;
        }
        Ok(Self::from_parts(
            rows,
            cols,
            values,
            excluded,
            SingularityPolicy::default(),
            0,
        ))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: fields have at least 2×2 cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cell values, row-major, excluded cells included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Exclusion flags, row-major.
    pub fn excluded_mask(&self) -> &[bool] {
        &self.excluded
    }

    /// Raw value of cell `(row, col)`, sentinel for excluded cells.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Value of cell `(row, col)`, or `None` if excluded.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let i = row * self.cols + col;
        (!self.excluded[i]).then_some(self.values[i])
    }

    /// Whether cell `(row, col)` is excluded.
    pub fn is_excluded(&self, row: usize, col: usize) -> bool {
        self.excluded[row * self.cols + col]
    }

    /// Number of excluded cells, whatever the cause.
    pub fn excluded_count(&self) -> usize {
        self.excluded.iter().filter(|&&b| b).count()
    }

    /// Number of cells excluded because their value was non-finite.
    pub fn guarded_count(&self) -> usize {
        self.guarded
    }

    /// The singularity policy the field was evaluated under.
    pub fn policy(&self) -> SingularityPolicy {
        self.policy
    }

    /// Iterator over `(flat_index, value)` of non-excluded cells.
    pub fn valid_cells(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .zip(&self.excluded)
            .enumerate()
            .filter(|(_, (_, &ex))| !ex)
            .map(|(i, (&v, _))| (i, v))
    }

    /// Lowest non-excluded cell as `(flat_index, value)`.
    pub fn min_valid(&self) -> Option<(usize, f64)> {
        self.valid_cells()
            .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
                Some((_, bv)) if bv <= v => best,
                _ => Some((i, v)),
            })
    }

    /// Highest non-excluded cell as `(flat_index, value)`.
    pub fn max_valid(&self) -> Option<(usize, f64)> {
        self.valid_cells()
            .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((i, v)),
            })
    }

    /// `(min, max)` over non-excluded cells.
    pub fn valid_range(&self) -> Option<(f64, f64)> {
        Some((self.min_valid()?.1, self.max_valid()?.1))
    }

    /// Split a flat index into `(row, col)`.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}
