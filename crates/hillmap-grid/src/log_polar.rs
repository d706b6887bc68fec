//! Log-polar screen sampling for multi-planet maps.
//!
//! A square screen grid on `[-e, e]²` is mapped onto heliocentric
//! distance by a logarithmic radius law, so inner and outer planets are
//! both visible on one image:
//!
//! ```text
//! rho = max(|s|, hole)
//! R   = exp(ln r_min + rho * (ln r_max - ln r_min))
//! ```
//!
//! The angle is carried over unchanged. The hole keeps the centre from
//! collapsing onto `r_min` and reads as a small disc around the Sun.

use crate::bounds::Bounds;
use crate::grid::{check_shape, linspace_at, SampleGrid};
use hillmap_core::{DomainError, Point2};

/// Parameters of the screen → heliocentric radius law.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogPolarMapping {
    /// Half-extent of the square screen domain. Default: 1.1.
    pub screen_extent: f64,
    /// Heliocentric distance at screen radius 0 (AU). Default: 0.25.
    pub r_min: f64,
    /// Heliocentric distance at screen radius 1 (AU). Default: 6.5.
    pub r_max: f64,
    /// Screen radii below this are raised to it. Default: 0.08.
    pub hole: f64,
}

impl Default for LogPolarMapping {
    fn default() -> Self {
        Self {
            screen_extent: 1.1,
            r_min: 0.25,
            r_max: 6.5,
            hole: 0.08,
        }
    }
}

impl LogPolarMapping {
    /// Check that every parameter is finite and ordered.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.screen_extent.is_finite() || self.screen_extent <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "screen_extent",
                reason: format!("must be finite and > 0, got {}", self.screen_extent),
            });
        }
        if !self.r_min.is_finite() || self.r_min <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "r_min",
                reason: format!("must be finite and > 0, got {}", self.r_min),
            });
        }
        if !self.r_max.is_finite() || self.r_max <= self.r_min {
            return Err(DomainError::InvalidParameter {
                name: "r_max",
                reason: format!("must be finite and > r_min ({}), got {}", self.r_min, self.r_max),
            });
        }
        if !self.hole.is_finite() || self.hole < 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "hole",
                reason: format!("must be finite and >= 0, got {}", self.hole),
            });
        }
        Ok(())
    }

    /// Heliocentric distance for screen radius `rho`.
    pub fn radius_for_screen(&self, rho: f64) -> f64 {
        let (lo, hi) = (self.r_min.ln(), self.r_max.ln());
        (lo + rho.max(self.hole) * (hi - lo)).exp()
    }

    /// Screen radius at which heliocentric distance `radius` is drawn.
    ///
    /// Inverse of [`radius_for_screen`](Self::radius_for_screen) outside
    /// the hole; used to place orbit rings and planet markers.
    pub fn screen_radius_for(&self, radius: f64) -> f64 {
        let (lo, hi) = (self.r_min.ln(), self.r_max.ln());
        (radius.ln() - lo) / (hi - lo)
    }
}

/// Polar description of one log-polar sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarSample {
    /// Heliocentric distance (AU).
    pub radius: f64,
    /// Polar angle in `(-pi, pi]`.
    pub theta: f64,
}

/// A square screen grid with a logarithmic radius law.
///
/// [`SampleGrid::position`] returns the heliocentric Cartesian point
/// `(R cos θ, R sin θ)` in AU; [`screen_position`](Self::screen_position)
/// returns the undistorted screen coordinate that overlays are drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct LogPolarGrid {
    resolution: usize,
    mapping: LogPolarMapping,
    screen: Bounds,
}

impl LogPolarGrid {
    /// Create a `resolution × resolution` grid.
    pub fn new(resolution: usize, mapping: LogPolarMapping) -> Result<Self, DomainError> {
        check_shape(resolution, resolution)?;
        mapping.validate()?;
        let e = mapping.screen_extent;
        let screen = Bounds::new(-e, e, -e, e)?;
        Ok(Self {
            resolution,
            mapping,
            screen,
        })
    }

    /// The radius law.
    pub fn mapping(&self) -> &LogPolarMapping {
        &self.mapping
    }

    /// The screen rectangle `[-e, e]²`.
    pub fn screen_bounds(&self) -> Bounds {
        self.screen
    }

    /// Undistorted screen coordinate of cell `(row, col)`.
    pub fn screen_position(&self, row: usize, col: usize) -> Point2 {
        let e = self.mapping.screen_extent;
        Point2::new(
            linspace_at(-e, e, self.resolution, col),
            linspace_at(-e, e, self.resolution, row),
        )
    }

    /// Polar heliocentric description of cell `(row, col)`.
    pub fn polar(&self, row: usize, col: usize) -> PolarSample {
        let s = self.screen_position(row, col);
        PolarSample {
            radius: self.mapping.radius_for_screen(s.x.hypot(s.y)),
            theta: s.y.atan2(s.x),
        }
    }
}

impl SampleGrid for LogPolarGrid {
    fn rows(&self) -> usize {
        self.resolution
    }

    fn cols(&self) -> usize {
        self.resolution
    }

    fn position(&self, row: usize, col: usize) -> Point2 {
        let p = self.polar(row, col);
        Point2::new(p.radius * p.theta.cos(), p.radius * p.theta.sin())
    }

    fn descriptor(&self) -> Vec<u8> {
        let m = &self.mapping;
        let mut out = Vec::with_capacity(1 + 8 + 4 * 8);
        out.push(b'P');
        out.extend_from_slice(&(self.resolution as u64).to_le_bytes());
        for v in [m.screen_extent, m.r_min, m.r_max, m.hole] {
            out.extend_from_slice(&v.to_bits().to_le_bytes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    #[test]
    fn default_mapping_is_valid() {
        assert!(LogPolarMapping::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_radius_range() {
        let m = LogPolarMapping {
            r_max: 0.1,
            ..Default::default()
        };
        assert!(matches!(
            LogPolarGrid::new(16, m),
            Err(DomainError::InvalidParameter { name: "r_max", .. })
        ));
    }

    #[test]
    fn radius_law_endpoints() {
        let m = LogPolarMapping::default();
        assert!((m.radius_for_screen(1.0) - 6.5).abs() < 1e-12);
        // Inside the hole every radius collapses to the hole radius.
        assert_eq!(m.radius_for_screen(0.0), m.radius_for_screen(0.08));
        assert!(m.radius_for_screen(0.0) > m.r_min);
    }

    #[test]
    fn screen_radius_round_trips_outside_hole() {
        let m = LogPolarMapping::default();
        for r in [0.39, 0.72, 1.0, 1.52, 5.2] {
            let rho = m.screen_radius_for(r);
            assert!((m.radius_for_screen(rho) - r).abs() < 1e-12);
        }
    }

    #[test]
    fn centre_cell_lands_on_hole_radius() {
        let g = LogPolarGrid::new(5, LogPolarMapping::default()).unwrap();
        let p = g.polar(2, 2);
        assert!((p.radius - g.mapping().radius_for_screen(0.08)).abs() < 1e-12);
    }

    #[test]
    fn screen_bounds_match_extent() {
        let g = LogPolarGrid::new(8, LogPolarMapping::default()).unwrap();
        let b = g.screen_bounds();
        assert_eq!(b.x_min(), -1.1);
        assert_eq!(b.y_max(), 1.1);
        assert_eq!(g.screen_position(7, 7), Point2::new(1.1, 1.1));
    }

    #[test]
    fn compliance_odd_resolution() {
        // Odd resolutions put a sample on the origin; the hole keeps it finite.
        compliance::run_full_compliance(&LogPolarGrid::new(9, LogPolarMapping::default()).unwrap());
    }

    proptest! {
        #[test]
        fn radius_is_monotone_in_screen_radius(a in 0.0f64..1.5, b in 0.0f64..1.5) {
            let m = LogPolarMapping::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(m.radius_for_screen(lo) <= m.radius_for_screen(hi));
        }

        #[test]
        fn position_matches_polar(res in 2usize..24, row in 0usize..24, col in 0usize..24) {
            let g = LogPolarGrid::new(res, LogPolarMapping::default()).unwrap();
            let (row, col) = (row % res, col % res);
            let p = g.position(row, col);
            let polar = g.polar(row, col);
            prop_assert!((p.x.hypot(p.y) - polar.radius).abs() < 1e-9);
        }
    }
}
