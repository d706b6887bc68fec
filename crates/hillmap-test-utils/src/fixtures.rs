//! Standard systems and grids.

use hillmap_core::{Point2, TwoBodySystem};
use hillmap_grid::{Bounds, LinearGrid, LogPolarGrid, LogPolarMapping};

/// The Earth–Sun system.
pub fn earth_sun() -> TwoBodySystem {
    TwoBodySystem::earth_sun()
}

/// Two equal primaries at `(-0.5, 0)` and `(0.5, 0)`.
pub fn equal_masses() -> TwoBodySystem {
    TwoBodySystem::new(0.5).unwrap()
}

/// A system with the given mass ratio.
pub fn system(mu: f64) -> TwoBodySystem {
    TwoBodySystem::new(mu).unwrap()
}

/// `n × n` samples over `[-half, half]²`.
pub fn square_grid(half: f64, n: usize) -> LinearGrid {
    LinearGrid::new(Bounds::square(half).unwrap(), n, n).unwrap()
}

/// `cols × rows` samples over a box centred on `center`.
pub fn window(center: Point2, half_width: f64, half_height: f64, cols: usize, rows: usize) -> LinearGrid {
    let b = Bounds::centered(center, half_width, half_height).unwrap();
    LinearGrid::new(b, cols, rows).unwrap()
}

/// A log-polar grid with the default radius law.
pub fn log_polar(resolution: usize) -> LogPolarGrid {
    LogPolarGrid::new(resolution, LogPolarMapping::default()).unwrap()
}
