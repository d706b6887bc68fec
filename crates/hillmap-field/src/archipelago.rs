//! Composite map of several normalized planetary wells.
//!
//! Each planet forms its own two-body system with the Sun. For every
//! log-polar sample the point is derotated into that planet's rotating
//! frame (scaled so the planet's orbit has radius 1), Φ is evaluated and
//! normalized by the depth scale `mu^(1/3)` relative to an approximate
//! L1 energy, and the result is faded by a radial band around the orbit
//! and an angular window around the planet:
//!
//! ```text
//! w    = exp(-(ln R - ln r_p)² / 2σr²) · exp(-θ_local² / 2σθ²)
//! Z    = max(Z, norm · w - (1 - w) · depth)
//! ```
//!
//! `Z` starts at a flat background far below any well, so where no
//! planet contributes the map stays at the background.

use std::f64::consts::PI;

use hillmap_core::{DomainError, Point2, TwoBodySystem};
use hillmap_grid::{LogPolarGrid, SampleGrid};
use indexmap::IndexMap;

use crate::field::PotentialField;
use crate::guard::FiniteGuard;
use crate::policy::SingularityPolicy;
use crate::potential::potential_with_policy;

/// One planet of the archipelago.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetWell {
    name: String,
    orbit_radius: f64,
    angle: f64,
    system: TwoBodySystem,
}

impl PlanetWell {
    /// Create a planet at heliocentric distance `orbit_radius` (AU) and
    /// polar angle `angle` (radians), with planet/Sun mass ratio `mu`.
    pub fn new(
        name: impl Into<String>,
        orbit_radius: f64,
        mu: f64,
        angle: f64,
    ) -> Result<Self, DomainError> {
        if !orbit_radius.is_finite() || orbit_radius <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "orbit_radius",
                reason: format!("must be finite and > 0, got {orbit_radius}"),
            });
        }
        if !angle.is_finite() {
            return Err(DomainError::InvalidParameter {
                name: "angle",
                reason: format!("must be finite, got {angle}"),
            });
        }
        Ok(Self {
            name: name.into(),
            orbit_radius,
            angle,
            system: TwoBodySystem::new(mu)?,
        })
    }

    /// Planet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heliocentric orbit radius (AU).
    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    /// Polar angle of the planet (radians).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The Sun–planet system.
    pub fn system(&self) -> &TwoBodySystem {
        &self.system
    }

    /// Approximate effective potential at L1, `-3/2 - (mu/3)^(1/3)`.
    pub fn reference_energy(&self) -> f64 {
        -1.5 - self.system.hill_radius()
    }

    /// Depth scale of the planet's well, `mu^(1/3)`.
    pub fn depth_scale(&self) -> f64 {
        self.system.mu().cbrt()
    }
}

/// Blending parameters shared by all planets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchipelagoParams {
    /// Width of the radial band in `ln R`. Default: 0.15.
    pub radial_sigma: f64,
    /// Width of the angular window (radians). Default: 0.5.
    pub angular_sigma: f64,
    /// Initial composite value. Default: -200.
    pub background: f64,
    /// How far a fully faded contribution sinks. Default: 10.
    pub fade_depth: f64,
    /// Distance floor in each planet's frame. Default: 1e-4.
    pub min_radius: f64,
}

impl Default for ArchipelagoParams {
    fn default() -> Self {
        Self {
            radial_sigma: 0.15,
            angular_sigma: 0.5,
            background: -200.0,
            fade_depth: 10.0,
            min_radius: 1e-4,
        }
    }
}

impl ArchipelagoParams {
    /// Check every parameter.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, v) in [
            ("radial_sigma", self.radial_sigma),
            ("angular_sigma", self.angular_sigma),
            ("min_radius", self.min_radius),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(DomainError::InvalidParameter {
                    name,
                    reason: format!("must be finite and > 0, got {v}"),
                });
            }
        }
        for (name, v) in [("background", self.background), ("fade_depth", self.fade_depth)] {
            if !v.is_finite() {
                return Err(DomainError::InvalidParameter {
                    name,
                    reason: format!("must be finite, got {v}"),
                });
            }
        }
        Ok(())
    }
}

/// An ordered set of planets plus blending parameters.
#[derive(Clone, Debug, Default)]
pub struct Archipelago {
    planets: IndexMap<String, PlanetWell>,
    params: ArchipelagoParams,
}

impl Archipelago {
    /// An empty archipelago.
    pub fn new(params: ArchipelagoParams) -> Result<Self, DomainError> {
        params.validate()?;
        Ok(Self {
            planets: IndexMap::new(),
            params,
        })
    }

    /// The five-planet map: Mercury through Jupiter.
    pub fn solar_system() -> Result<Self, DomainError> {
        let mut a = Self::new(ArchipelagoParams::default())?;
        for (name, r, mu, angle) in [
            ("Mercury", 0.39, 1.66e-7, 0.0),
            ("Venus", 0.72, 2.45e-6, 1.25),
            ("Earth", 1.00, 3.00e-6, 2.51),
            ("Mars", 1.52, 3.23e-7, 3.76),
            ("Jupiter", 5.20, 9.54e-4, 5.02),
        ] {
            a.insert(PlanetWell::new(name, r, mu, angle)?)?;
        }
        Ok(a)
    }

    /// Add a planet. Names must be unique.
    pub fn insert(&mut self, planet: PlanetWell) -> Result<(), DomainError> {
        if self.planets.contains_key(planet.name()) {
            return Err(DomainError::InvalidParameter {
                name: "planet",
                reason: format!("duplicate planet name '{}'", planet.name()),
            });
        }
        self.planets.insert(planet.name().to_string(), planet);
        Ok(())
    }

    /// Look up a planet by name.
    pub fn get(&self, name: &str) -> Option<&PlanetWell> {
        self.planets.get(name)
    }

    /// Planets in insertion order.
    pub fn planets(&self) -> impl Iterator<Item = &PlanetWell> {
        self.planets.values()
    }

    /// Number of planets.
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether no planet has been added.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Blending parameters.
    pub fn params(&self) -> &ArchipelagoParams {
        &self.params
    }

    /// Composite value for a heliocentric sample at polar `(radius, theta)`.
    pub fn composite_at(&self, radius: f64, theta: f64) -> f64 {
        let p = &self.params;
        let policy = SingularityPolicy::Clamp {
            min_radius: p.min_radius,
        };
        let mut z = p.background;
        for planet in self.planets.values() {
            let local_theta = wrap_angle(theta - planet.angle);
            let local_r = radius / planet.orbit_radius;
            let local = Point2::new(local_r * local_theta.cos(), local_r * local_theta.sin());

            // Clamp never excludes.
            let pot = potential_with_policy(&planet.system, local, policy).unwrap_or(p.background);
            let norm = (pot - planet.reference_energy()) / planet.depth_scale();

            let dr = radius.ln() - planet.orbit_radius.ln();
            let radial = (-(dr * dr) / (2.0 * p.radial_sigma * p.radial_sigma)).exp();
            let angular =
                (-(local_theta * local_theta) / (2.0 * p.angular_sigma * p.angular_sigma)).exp();
            let w = radial * angular;

            z = z.max(norm * w - (1.0 - w) * p.fade_depth);
        }
        z
    }
}

/// Wrap an angle into `[-pi, pi)`.
pub(crate) fn wrap_angle(theta: f64) -> f64 {
    (theta + PI).rem_euclid(2.0 * PI) - PI
}

/// Evaluate the composite archipelago map over a log-polar grid.
pub fn evaluate_archipelago(
    archipelago: &Archipelago,
    grid: &LogPolarGrid,
) -> Result<PotentialField, DomainError> {
    if archipelago.is_empty() {
        return Err(DomainError::InvalidParameter {
            name: "planets",
            reason: "archipelago has no planets".to_string(),
        });
    }
    let rows = grid.rows();
    let cols = grid.cols();
    let mut values = vec![0.0; rows * cols];
    let mut excluded = vec![false; rows * cols];
    let guarded = {
        let mut guard = FiniteGuard::new(&mut values, &mut excluded, 0);
        for row in 0..rows {
            for col in 0..cols {
                let s = grid.polar(row, col);
                guard.write(row * cols + col, Some(archipelago.composite_at(s.radius, s.theta)));
            }
        }
        guard.caught()
    };
    tracing::debug!(
        planets = archipelago.len(),
        resolution = rows,
        guarded,
        "evaluated archipelago composite"
    );
    Ok(PotentialField::from_parts(
        rows,
        cols,
        values,
        excluded,
        SingularityPolicy::Clamp {
            min_radius: archipelago.params.min_radius,
        },
        guarded,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillmap_grid::LogPolarMapping;

    #[test]
    fn solar_system_keeps_insertion_order() {
        let a = Archipelago::solar_system().unwrap();
        let names: Vec<&str> = a.planets().map(|p| p.name()).collect();
        assert_eq!(names, ["Mercury", "Venus", "Earth", "Mars", "Jupiter"]);
        assert_eq!(a.get("Jupiter").unwrap().orbit_radius(), 5.2);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut a = Archipelago::new(ArchipelagoParams::default()).unwrap();
        a.insert(PlanetWell::new("Earth", 1.0, 3e-6, 0.0).unwrap()).unwrap();
        assert!(a.insert(PlanetWell::new("Earth", 2.0, 3e-6, 1.0).unwrap()).is_err());
    }

    #[test]
    fn planet_validation() {
        assert!(PlanetWell::new("x", 0.0, 1e-6, 0.0).is_err());
        assert!(PlanetWell::new("x", 1.0, 0.0, 0.0).is_err());
        assert!(PlanetWell::new("x", 1.0, 1e-6, f64::NAN).is_err());
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
        assert_eq!(wrap_angle(0.0), 0.0);
        let w = wrap_angle(PI);
        assert!((-PI..PI).contains(&w));
    }

    #[test]
    fn background_far_from_every_planet() {
        let mut a = Archipelago::new(ArchipelagoParams::default()).unwrap();
        a.insert(PlanetWell::new("Earth", 1.0, 3e-6, 0.0).unwrap()).unwrap();
        // Opposite side of the Sun, far outside the radial band.
        // The faded contribution sits at -fade_depth, above the background.
        let z = a.composite_at(4.0, PI);
        assert!((z + a.params().fade_depth).abs() < 1e-6, "z = {z}");
    }

    #[test]
    fn well_bottom_sits_below_its_gateway() {
        let mut a = Archipelago::new(ArchipelagoParams::default()).unwrap();
        let mu = 3e-6;
        let earth = PlanetWell::new("Earth", 1.0, mu, 0.0).unwrap();
        let l1_r = 1.0 - earth.system().hill_radius();
        a.insert(earth).unwrap();
        let gateway = a.composite_at(l1_r, 0.0);
        let bottom = a.composite_at(1.0, 0.0);
        assert!(gateway > -1.0 && gateway < 2.0, "gateway = {gateway}");
        assert!(bottom < gateway - 1.0, "bottom = {bottom}, gateway = {gateway}");

        // At the planet r2 = mu is floored at min_radius, so the well
        // bottom is finite and known in closed form.
        let phi = -(1.0 - mu) / (1.0 + mu) - mu / 1e-4 - 0.5;
        let expected = (phi - (-1.5 - (mu / 3.0).cbrt())) / mu.cbrt();
        assert!((bottom - expected).abs() < 1e-9, "bottom = {bottom}, expected {expected}");
    }

    #[test]
    fn evaluation_is_finite_and_shaped() {
        let a = Archipelago::solar_system().unwrap();
        let g = LogPolarGrid::new(64, LogPolarMapping::default()).unwrap();
        let f = evaluate_archipelago(&a, &g).unwrap();
        assert_eq!(f.shape(), (64, 64));
        assert!(f.values().iter().all(|v| v.is_finite()));
        assert_eq!(f.guarded_count(), 0);
    }

    #[test]
    fn empty_archipelago_is_rejected() {
        let a = Archipelago::new(ArchipelagoParams::default()).unwrap();
        let g = LogPolarGrid::new(8, LogPolarMapping::default()).unwrap();
        assert!(evaluate_archipelago(&a, &g).is_err());
    }
}
