//! Integration tests: grids through the public `dyn SampleGrid` surface.

use hillmap_core::{Axis, DomainError, Point2};
use hillmap_grid::{Bounds, LinearGrid, LogPolarGrid, LogPolarMapping, SampleGrid};

fn grids() -> Vec<Box<dyn SampleGrid>> {
    vec![
        Box::new(LinearGrid::new(Bounds::square(2.0).unwrap(), 100, 100).unwrap()),
        Box::new(LinearGrid::new(Bounds::new(-1.5, 1.7, -0.9, 0.9).unwrap(), 64, 36).unwrap()),
        Box::new(LogPolarGrid::new(48, LogPolarMapping::default()).unwrap()),
    ]
}

#[test]
fn every_layout_has_finite_positions() {
    for grid in grids() {
        for i in 0..grid.cell_count() {
            assert!(grid.position_at(i).is_finite());
        }
    }
}

#[test]
fn descriptors_differ_between_layouts() {
    let g = grids();
    assert_ne!(g[0].descriptor(), g[1].descriptor());
    assert_ne!(g[1].descriptor(), g[2].descriptor());
}

#[test]
fn hill_zoom_window_around_earth() {
    let earth = Point2::new(1.0 - 3.003e-6, 0.0);
    let rows = 200;
    let cols = (rows as f64 * 1.77).round() as usize;
    let b = Bounds::centered(earth, 0.016, 0.016).unwrap();
    let g = LinearGrid::new(b, cols, rows).unwrap();
    assert_eq!(g.cols(), 354);
    let (r, c) = g.nearest_cell(earth).unwrap();
    assert!(g.position(r, c).distance(earth) <= g.dx().hypot(g.dy()));
}

#[test]
fn log_polar_outer_ring_reaches_jupiter() {
    let g = LogPolarGrid::new(181, LogPolarMapping::default()).unwrap();
    let max_r = (0..g.cell_count())
        .map(|i| {
            let p = g.position_at(i);
            p.x.hypot(p.y)
        })
        .fold(0.0f64, f64::max);
    assert!(max_r > 5.2, "outer radius {max_r} should exceed Jupiter's orbit");
}

#[test]
fn degenerate_inputs_fail_fast() {
    assert!(matches!(
        Bounds::new(0.0, 0.0, -1.0, 1.0),
        Err(DomainError::DegenerateBounds { axis: Axis::X, .. })
    ));
    assert!(matches!(
        LogPolarGrid::new(1, LogPolarMapping::default()),
        Err(DomainError::TooFewSamples { .. })
    ));
}
