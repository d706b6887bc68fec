//! Finite-value guard for field buffers.
//!
//! [`FiniteGuard`] wraps the value and exclusion buffers of one band of
//! rows. Every write is checked: a non-finite value is turned into an
//! excluded sentinel cell and counted, so nothing non-finite leaves the
//! evaluator. In debug builds the guard also tracks which cells were
//! written and logs a diagnostic on drop if coverage is incomplete.

use hillmap_core::NonFiniteValueError;

use crate::policy::EXCLUDED_SENTINEL;

/// Reject non-finite values.
pub(crate) fn check_finite(cell_index: usize, value: f64) -> Result<f64, NonFiniteValueError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NonFiniteValueError { cell_index, value })
    }
}

/// Guard over a contiguous band of field cells.
///
/// `offset` is the flat index of the band's first cell in the full
/// field, used only for diagnostics.
pub(crate) struct FiniteGuard<'a> {
    values: &'a mut [f64],
    excluded: &'a mut [bool],
    offset: usize,
    caught: usize,
    #[cfg(debug_assertions)]
    written: Vec<bool>,
}

impl<'a> FiniteGuard<'a> {
    pub(crate) fn new(values: &'a mut [f64], excluded: &'a mut [bool], offset: usize) -> Self {
        debug_assert_eq!(values.len(), excluded.len());
        Self {
            #[cfg(debug_assertions)]
            written: vec![false; values.len()],
            values,
            excluded,
            offset,
            caught: 0,
        }
    }

    /// Write a cell. `None` means the singularity policy excluded it.
    pub(crate) fn write(&mut self, local: usize, value: Option<f64>) {
        match value.map(|v| check_finite(self.offset + local, v)) {
            Some(Ok(v)) => {
                self.values[local] = v;
                self.excluded[local] = false;
            }
            Some(Err(e)) => {
                tracing::trace!(%e, "excluding non-finite cell");
                self.values[local] = EXCLUDED_SENTINEL;
                self.excluded[local] = true;
                self.caught += 1;
            }
            None => {
                self.values[local] = EXCLUDED_SENTINEL;
                self.excluded[local] = true;
            }
        }
        #[cfg(debug_assertions)]
        {
            self.written[local] = true;
        }
    }

    /// Number of cells whose value was non-finite.
    pub(crate) fn caught(&self) -> usize {
        self.caught
    }
}

#[cfg(debug_assertions)]
impl Drop for FiniteGuard<'_> {
    fn drop(&mut self) {
        if self.values.is_empty() {
            return;
        }
        let total = self.written.len();
        let count = self.written.iter().filter(|&&b| b).count();
        if count < total {
            tracing::warn!(
                offset = self.offset,
                written = count,
                total,
                "field band incomplete: {:.1}% of cells written",
                (count as f64 / total as f64) * 100.0,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        let mut values = vec![0.0; 3];
        let mut excluded = vec![true; 3];
        {
            let mut guard = FiniteGuard::new(&mut values, &mut excluded, 0);
            for i in 0..3 {
                guard.write(i, Some(-(i as f64)));
            }
            assert_eq!(guard.caught(), 0);
        }
        assert_eq!(values, vec![0.0, -1.0, -2.0]);
        assert_eq!(excluded, vec![false; 3]);
    }

    #[test]
    fn non_finite_becomes_excluded_sentinel() {
        let mut values = vec![0.0; 3];
        let mut excluded = vec![false; 3];
        {
            let mut guard = FiniteGuard::new(&mut values, &mut excluded, 10);
            guard.write(0, Some(f64::NAN));
            guard.write(1, Some(f64::NEG_INFINITY));
            guard.write(2, Some(1.0));
            assert_eq!(guard.caught(), 2);
        }
        assert_eq!(values[0], EXCLUDED_SENTINEL);
        assert_eq!(values[1], EXCLUDED_SENTINEL);
        assert_eq!(excluded, vec![true, true, false]);
    }

    #[test]
    fn policy_exclusion_is_not_counted_as_caught() {
        let mut values = vec![0.0; 1];
        let mut excluded = vec![false; 1];
        let mut guard = FiniteGuard::new(&mut values, &mut excluded, 0);
        guard.write(0, None);
        assert_eq!(guard.caught(), 0);
    }

    #[test]
    fn check_finite_reports_global_index() {
        let err = check_finite(42, f64::INFINITY).unwrap_err();
        assert_eq!(err.cell_index, 42);
        assert_eq!(check_finite(0, -3.5), Ok(-3.5));
    }
}
