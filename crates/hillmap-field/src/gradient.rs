//! Analytic gradient of the effective potential.
//!
//! ```text
//! ∂Φ/∂x = (1-mu)(x+mu)/r1³ + mu(x-1+mu)/r2³ - x
//! ∂Φ/∂y = (1-mu) y/r1³     + mu y/r2³       - y
//! ```
//!
//! Both components vanish exactly at the five Lagrange points.

use hillmap_core::{Point2, TwoBodySystem};

/// `(∂Φ/∂x, ∂Φ/∂y)` at `p`. Non-finite at either primary.
pub fn potential_gradient(system: &TwoBodySystem, p: Point2) -> (f64, f64) {
    let mu = system.mu();
    let dx1 = p.x + mu;
    let dx2 = p.x - 1.0 + mu;
    let r1 = dx1.hypot(p.y);
    let r2 = dx2.hypot(p.y);
    let k1 = (1.0 - mu) / (r1 * r1 * r1);
    let k2 = mu / (r2 * r2 * r2);
    (k1 * dx1 + k2 * dx2 - p.x, k1 * p.y + k2 * p.y - p.y)
}

/// `∂Φ/∂x` restricted to the x-axis (`y = 0`).
///
/// This is the function whose roots are L1, L2 and L3. It tends to
/// `+inf` just right of each primary and `-inf` just left of it.
pub fn axis_derivative(system: &TwoBodySystem, x: f64) -> f64 {
    let mu = system.mu();
    let d1 = x + mu;
    let d2 = x - 1.0 + mu;
    (1.0 - mu) * d1.signum() / (d1 * d1) + mu * d2.signum() / (d2 * d2) - x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::effective_potential;
    use proptest::prelude::*;

    fn central_difference(system: &TwoBodySystem, p: Point2, h: f64) -> (f64, f64) {
        let gx = (effective_potential(system, Point2::new(p.x + h, p.y))
            - effective_potential(system, Point2::new(p.x - h, p.y)))
            / (2.0 * h);
        let gy = (effective_potential(system, Point2::new(p.x, p.y + h))
            - effective_potential(system, Point2::new(p.x, p.y - h)))
            / (2.0 * h);
        (gx, gy)
    }

    #[test]
    fn vanishes_at_triangular_points() {
        for mu in [1e-6, 0.01, 0.3, 0.5, 0.9] {
            let s = TwoBodySystem::new(mu).unwrap();
            let l4 = Point2::new(0.5 - mu, 3f64.sqrt() / 2.0);
            let (gx, gy) = potential_gradient(&s, l4);
            assert!(gx.abs() < 1e-12 && gy.abs() < 1e-12, "mu={mu}: ({gx}, {gy})");
        }
    }

    #[test]
    fn axis_derivative_agrees_with_full_gradient() {
        let s = TwoBodySystem::new(0.2).unwrap();
        for x in [-1.7, -0.5, 0.3, 0.79, 1.3] {
            let (gx, gy) = potential_gradient(&s, Point2::new(x, 0.0));
            assert!((axis_derivative(&s, x) - gx).abs() < 1e-12);
            assert_eq!(gy, 0.0);
        }
    }

    #[test]
    fn axis_derivative_signs_around_secondary() {
        let s = TwoBodySystem::new(0.01).unwrap();
        let x2 = s.secondary().x;
        assert!(axis_derivative(&s, x2 - 1e-6) < 0.0);
        assert!(axis_derivative(&s, x2 + 1e-6) > 0.0);
    }

    proptest! {
        #[test]
        fn matches_central_difference(
            mu in 0.001f64..0.999,
            x in -1.8f64..1.8,
            y in 0.2f64..1.5,
        ) {
            let s = TwoBodySystem::new(mu).unwrap();
            let p = Point2::new(x, y);
            let (gx, gy) = potential_gradient(&s, p);
            let (nx, ny) = central_difference(&s, p, 1e-6);
            prop_assert!((gx - nx).abs() < 1e-4 * (1.0 + gx.abs()));
            prop_assert!((gy - ny).abs() < 1e-4 * (1.0 + gy.abs()));
        }
    }
}
