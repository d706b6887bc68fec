//! The two-primary configuration of the circular restricted three-body problem.

use crate::error::DomainError;
use crate::point::Point2;

/// Two primaries in circular mutual orbit, normalized so that the total
/// mass, their separation, and the orbital angular velocity are all 1.
///
/// In the rotating frame mass 1 sits at `(-mu, 0)` and mass 2 at
/// `(1 - mu, 0)`. A `TwoBodySystem` can only hold a mass ratio strictly
/// inside `(0, 1)`; construction rejects everything else.
///
/// # Examples
///
/// ```
/// use hillmap_core::TwoBodySystem;
///
/// let sys = TwoBodySystem::new(0.5).unwrap();
/// assert_eq!(sys.primary().x, -0.5);
/// assert_eq!(sys.secondary().x, 0.5);
///
/// assert!(TwoBodySystem::new(0.0).is_err());
/// assert!(TwoBodySystem::new(1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoBodySystem {
    mu: f64,
}

impl TwoBodySystem {
    /// Earth–Sun mass ratio.
    pub const EARTH_SUN_MU: f64 = 3.003e-6;

    /// Create a system from the mass ratio `mu = m2 / (m1 + m2)`.
    pub fn new(mu: f64) -> Result<Self, DomainError> {
        if !mu.is_finite() || mu <= 0.0 || mu >= 1.0 {
            return Err(DomainError::MassRatioOutOfRange { mu });
        }
        Ok(Self { mu })
    }

    /// Create a system from two masses in any common unit.
    pub fn from_masses(m1: f64, m2: f64) -> Result<Self, DomainError> {
        if !m1.is_finite() || m1 <= 0.0 {
            return Err(DomainError::InvalidMass {
                name: "m1",
                value: m1,
            });
        }
        if !m2.is_finite() || m2 <= 0.0 {
            return Err(DomainError::InvalidMass {
                name: "m2",
                value: m2,
            });
        }
        Self::new(m2 / (m1 + m2))
    }

    /// The Earth–Sun system.
    pub fn earth_sun() -> Self {
        Self {
            mu: Self::EARTH_SUN_MU,
        }
    }

    /// Mass ratio `m2 / (m1 + m2)`.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Normalized mass of primary 1 (`1 - mu`).
    pub fn primary_mass(&self) -> f64 {
        1.0 - self.mu
    }

    /// Normalized mass of primary 2 (`mu`).
    pub fn secondary_mass(&self) -> f64 {
        self.mu
    }

    /// Rotating-frame position of mass 1.
    pub fn primary(&self) -> Point2 {
        Point2::new(-self.mu, 0.0)
    }

    /// Rotating-frame position of mass 2.
    pub fn secondary(&self) -> Point2 {
        Point2::new(1.0 - self.mu, 0.0)
    }

    /// Hill-sphere radius of mass 2, `(mu / 3)^(1/3)`.
    pub fn hill_radius(&self) -> f64 {
        (self.mu / 3.0).cbrt()
    }

    /// Hill-sphere radius of mass 1, `((1 - mu) / 3)^(1/3)`.
    pub fn primary_hill_radius(&self) -> f64 {
        ((1.0 - self.mu) / 3.0).cbrt()
    }

    /// Whether mass 2 is the smaller (or equal) primary.
    pub fn secondary_is_smaller(&self) -> bool {
        self.mu <= 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_boundary_and_non_finite() {
        for mu in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    TwoBodySystem::new(mu),
                    Err(DomainError::MassRatioOutOfRange { .. })
                ),
                "mu = {mu} should be rejected"
            );
        }
    }

    #[test]
    fn from_masses_normalizes() {
        let sys = TwoBodySystem::from_masses(3.0, 1.0).unwrap();
        assert!((sys.mu() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn from_masses_rejects_non_positive() {
        assert_eq!(
            TwoBodySystem::from_masses(0.0, 1.0),
            Err(DomainError::InvalidMass {
                name: "m1",
                value: 0.0
            })
        );
        assert!(TwoBodySystem::from_masses(1.0, -2.0).is_err());
    }

    #[test]
    fn earth_sun_hill_radius() {
        let sys = TwoBodySystem::earth_sun();
        assert!((sys.hill_radius() - 0.01).abs() < 1e-4);
        assert!(sys.secondary_is_smaller());
    }

    proptest! {
        #[test]
        fn primaries_are_unit_distance_apart(mu in 1e-9f64..0.999_999) {
            let sys = TwoBodySystem::new(mu).unwrap();
            prop_assert!((sys.primary().distance(sys.secondary()) - 1.0).abs() < 1e-12);
            // Barycenter at the origin.
            let com = sys.primary_mass() * sys.primary().x + sys.secondary_mass() * sys.secondary().x;
            prop_assert!(com.abs() < 1e-12);
        }
    }
}
