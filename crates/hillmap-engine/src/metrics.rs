//! Per-scene performance and outcome metrics.
//!
//! [`RunMetrics`] captures stage timings and a few counts for one scene
//! run. The pipeline fills it in and logs it when the scene finishes.

/// Timing and outcome metrics collected during a single scene run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Time spent building the sampling grid, in microseconds.
    pub grid_us: u64,
    /// Time spent evaluating the potential field, in microseconds.
    pub evaluate_us: u64,
    /// Time spent solving for Lagrange points, in microseconds.
    pub solve_us: u64,
    /// Time spent rasterizing bands, isolines and overlays, in microseconds.
    pub render_us: u64,
    /// Time spent encoding and writing the PNG, in microseconds.
    pub encode_us: u64,
    /// Number of grid cells.
    pub cell_count: usize,
    /// Cells flagged as excluded, for any reason.
    pub excluded_cells: usize,
    /// Cells excluded because their value was non-finite.
    pub guarded_cells: usize,
    /// Lagrange points found (0 for scenes that do not solve).
    pub converged_points: usize,
    /// FNV-1a hash of the evaluated field.
    pub field_hash: u64,
}

/// Microseconds elapsed since `start`, saturating at `u64::MAX`.
pub(crate) fn elapsed_us(start: std::time::Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.grid_us, 0);
        assert_eq!(m.evaluate_us, 0);
        assert_eq!(m.solve_us, 0);
        assert_eq!(m.render_us, 0);
        assert_eq!(m.encode_us, 0);
        assert_eq!(m.cell_count, 0);
        assert_eq!(m.excluded_cells, 0);
        assert_eq!(m.guarded_cells, 0);
        assert_eq!(m.converged_points, 0);
        assert_eq!(m.field_hash, 0);
    }

    #[test]
    fn elapsed_is_monotone() {
        let start = std::time::Instant::now();
        let a = elapsed_us(start);
        let b = elapsed_us(start);
        assert!(b >= a);
    }
}
