//! Row-band worker pool for large grids.
//!
//! Rows are split into bands and dispatched over a crossbeam channel to
//! scoped worker threads. Each worker evaluates its band into its own
//! buffers and sends them back over a reply channel; the caller copies
//! them into place. Cells are independent, so the result is
//! bit-identical to [`evaluate_potential`](crate::evaluate_potential).

use hillmap_core::{DomainError, TwoBodySystem};
use hillmap_grid::{check_shape, SampleGrid};

use crate::field::PotentialField;
use crate::policy::SingularityPolicy;
use crate::potential::{evaluate_band, Band};

/// Rows per dispatched band.
const ROWS_PER_BAND: usize = 32;

/// Evaluate Φ over `grid` using up to `workers` threads.
///
/// `workers` is clamped to `[1, bands]`. With one worker this runs on a
/// single spawned thread; the output never depends on the worker count.
pub fn evaluate_potential_parallel(
    system: &TwoBodySystem,
    grid: &dyn SampleGrid,
    policy: SingularityPolicy,
    workers: usize,
) -> Result<PotentialField, DomainError> {
    check_shape(grid.rows(), grid.cols())?;
    policy.validate()?;

    let rows = grid.rows();
    let cols = grid.cols();
    let bands: Vec<_> = (0..rows)
        .step_by(ROWS_PER_BAND)
        .map(|start| start..(start + ROWS_PER_BAND).min(rows))
        .collect();
    let workers = workers.clamp(1, bands.len());

    let mut values = vec![0.0; rows * cols];
    let mut excluded = vec![false; rows * cols];
    let mut guarded = 0;

    std::thread::scope(|scope| {
        let (task_tx, task_rx) = crossbeam_channel::unbounded();
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<Band>();

        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let reply_tx = reply_tx.clone();
            scope.spawn(move || {
                for band_rows in task_rx.iter() {
                    let band = evaluate_band(system, grid, policy, band_rows);
                    if reply_tx.send(band).is_err() {
                        break;
                    }
                }
            });
        }
        drop(task_rx);
        drop(reply_tx);

        for band_rows in bands {
            // Fails only once every worker has exited.
            if task_tx.send(band_rows).is_err() {
                break;
            }
        }
        drop(task_tx);

        for band in reply_rx.iter() {
            let start = band.rows.start * cols;
            let end = band.rows.end * cols;
            values[start..end].copy_from_slice(&band.values);
            excluded[start..end].copy_from_slice(&band.excluded);
            guarded += band.guarded;
        }
    });

    tracing::debug!(rows, cols, workers, guarded, "evaluated potential field in parallel");
    Ok(PotentialField::from_parts(
        rows, cols, values, excluded, policy, guarded,
    ))
}
