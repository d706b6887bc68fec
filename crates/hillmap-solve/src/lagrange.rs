//! The five Lagrange points of a [`TwoBodySystem`].

use hillmap_core::{
    ConvergenceError, DomainError, LagrangeLabel, LagrangePoint, Point2, SolveMethod, TwoBodySystem,
};
use hillmap_field::axis_derivative;
use smallvec::SmallVec;

use crate::roots::{brent, RootError};

/// Outer edge of the L2/L3 search along the x-axis.
const SEARCH_LIMIT: f64 = 2.0;

/// Brackets start this many Hill radii (of the adjacent mass) away from
/// a primary, where `∂Φ/∂x` is finite but still dominated by the pole.
const POLE_OFFSET: f64 = 1e-3;

/// Bracket ends stay at least this many machine epsilons (relative to
/// the primary's position) away from a mass, so they never round onto it.
const ULP_FLOOR: f64 = 8.0;

// ── Configuration ──────────────────────────────────────────────

/// Root-finder settings for the collinear points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on x. Default: 1e-12.
    pub tolerance: f64,
    /// Iteration budget per point. Default: 200.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

impl SolverConfig {
    /// Check the tolerance and the iteration budget.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "tolerance",
                reason: format!("must be finite and > 0, got {}", self.tolerance),
            });
        }
        if self.max_iterations == 0 {
            return Err(DomainError::InvalidParameter {
                name: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ── Solution ───────────────────────────────────────────────────

/// One result per Lagrange label, in [`LagrangeLabel::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct LagrangeSolution {
    results: [Result<LagrangePoint, ConvergenceError>; 5],
}

impl LagrangeSolution {
    /// The result for `label`.
    pub fn get(&self, label: LagrangeLabel) -> &Result<LagrangePoint, ConvergenceError> {
        &self.results[label.index()]
    }

    /// The solved point for `label`, if it converged.
    pub fn point(&self, label: LagrangeLabel) -> Option<&LagrangePoint> {
        self.get(label).as_ref().ok()
    }

    /// Position of `label`, if it converged.
    pub fn position(&self, label: LagrangeLabel) -> Option<Point2> {
        self.point(label).map(|p| p.position)
    }

    /// All five results in label order.
    pub fn results(&self) -> &[Result<LagrangePoint, ConvergenceError>; 5] {
        &self.results
    }

    /// The points that were found.
    pub fn converged(&self) -> SmallVec<[LagrangePoint; 5]> {
        self.results.iter().filter_map(|r| r.as_ref().ok().copied()).collect()
    }

    /// The per-point failures.
    pub fn errors(&self) -> impl Iterator<Item = &ConvergenceError> {
        self.results.iter().filter_map(|r| r.as_ref().err())
    }

    /// Whether all five points were found.
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(Result::is_ok)
    }
}

// ── Solver ─────────────────────────────────────────────────────

/// Search interval for a collinear point, or `None` for L4/L5.
///
/// L1 lies between the primaries, L2 beyond the smaller mass, and L3
/// beyond the larger mass on the opposite side. With equal masses mass 2
/// counts as the smaller, so L2 has `x > 0`.
pub fn collinear_bracket(system: &TwoBodySystem, label: LagrangeLabel) -> Option<(f64, f64)> {
    let x1 = system.primary().x;
    let x2 = system.secondary().x;
    let eps1 = pole_offset(system.primary_hill_radius(), x1);
    let eps2 = pole_offset(system.hill_radius(), x2);
    let beyond_secondary = (x2 + eps2, SEARCH_LIMIT);
    let beyond_primary = (-SEARCH_LIMIT, x1 - eps1);
    match label {
        LagrangeLabel::L1 => Some((x1 + eps1, x2 - eps2)),
        LagrangeLabel::L2 if system.secondary_is_smaller() => Some(beyond_secondary),
        LagrangeLabel::L2 => Some(beyond_primary),
        LagrangeLabel::L3 if system.secondary_is_smaller() => Some(beyond_primary),
        LagrangeLabel::L3 => Some(beyond_secondary),
        LagrangeLabel::L4 | LagrangeLabel::L5 => None,
    }
}

/// Distance kept between a bracket end and the mass at `x`.
fn pole_offset(hill_radius: f64, x: f64) -> f64 {
    (POLE_OFFSET * hill_radius).max(resolution_floor(x))
}

fn resolution_floor(x: f64) -> f64 {
    ULP_FLOOR * f64::EPSILON * x.abs().max(1.0)
}

/// Solve all five points with the default [`SolverConfig`].
///
/// # Examples
///
/// ```
/// use hillmap_core::{LagrangeLabel, TwoBodySystem};
/// use hillmap_solve::solve_lagrange_points;
///
/// let solution = solve_lagrange_points(&TwoBodySystem::earth_sun());
/// assert!(solution.is_complete());
/// let l1 = solution.position(LagrangeLabel::L1).unwrap();
/// assert!((l1.x - 0.99).abs() < 1e-3);
/// ```
pub fn solve_lagrange_points(system: &TwoBodySystem) -> LagrangeSolution {
    solve_with_valid(system, &SolverConfig::default())
}

/// Solve all five points with explicit root-finder settings.
///
/// Fails only if `config` is invalid; per-point convergence failures are
/// recorded in the returned solution.
pub fn solve_lagrange_points_with(
    system: &TwoBodySystem,
    config: &SolverConfig,
) -> Result<LagrangeSolution, DomainError> {
    config.validate()?;
    Ok(solve_with_valid(system, config))
}

fn solve_with_valid(system: &TwoBodySystem, config: &SolverConfig) -> LagrangeSolution {
    let results = LagrangeLabel::ALL.map(|label| solve_one(system, label, config));
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        tracing::debug!(mu = system.mu(), %err, "collinear solve failed");
    }
    LagrangeSolution { results }
}

fn solve_one(
    system: &TwoBodySystem,
    label: LagrangeLabel,
    config: &SolverConfig,
) -> Result<LagrangePoint, ConvergenceError> {
    let Some((lo, hi)) = collinear_bracket(system, label) else {
        return Ok(triangular(system, label));
    };
    let solved = brent(
        |x| axis_derivative(system, x),
        lo,
        hi,
        config.tolerance,
        config.max_iterations,
    );
    match solved {
        Ok(root) => Ok(LagrangePoint {
            label,
            position: Point2::new(root.x, 0.0),
            method: SolveMethod::Numerical {
                iterations: root.iterations,
            },
        }),
        Err(RootError::NoSignChange { .. }) => match unresolved_gateway(system, label, lo, hi) {
            Some(x) => {
                tracing::debug!(mu = system.mu(), %label, x, "gateway below f64 resolution");
                Ok(LagrangePoint {
                    label,
                    position: Point2::new(x, 0.0),
                    method: SolveMethod::AtResolution,
                })
            }
            None => Err(RootError::NoSignChange { lo, hi }.for_label(label)),
        },
        Err(e) => Err(e.for_label(label)),
    }
}

/// Bracket end beside the smaller mass, when L1 or L2 sits too close to
/// it for the bracket to straddle the root.
///
/// Once the Hill radius shrinks below the resolution floor the sign
/// change of `∂Φ/∂x` happens within a few ulps of the mass, and the end
/// next to the mass is the closest representable equilibrium.
fn unresolved_gateway(system: &TwoBodySystem, label: LagrangeLabel, lo: f64, hi: f64) -> Option<f64> {
    if !matches!(label, LagrangeLabel::L1 | LagrangeLabel::L2) {
        return None;
    }
    let (x_small, hill) = if system.secondary_is_smaller() {
        (system.secondary().x, system.hill_radius())
    } else {
        (system.primary().x, system.primary_hill_radius())
    };
    if POLE_OFFSET * hill >= resolution_floor(x_small) {
        return None;
    }
    Some(if (lo - x_small).abs() < (hi - x_small).abs() { lo } else { hi })
}

fn triangular(system: &TwoBodySystem, label: LagrangeLabel) -> LagrangePoint {
    let l4 = Point2::new(0.5 - system.mu(), 3f64.sqrt() / 2.0);
    let position = if label == LagrangeLabel::L5 {
        l4.reflect_x_axis()
    } else {
        l4
    };
    LagrangePoint {
        label,
        position,
        method: SolveMethod::ClosedForm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sys(mu: f64) -> TwoBodySystem {
        TwoBodySystem::new(mu).unwrap()
    }

    #[test]
    fn brackets_straddle_the_expected_side() {
        let s = sys(0.01);
        let (lo, hi) = collinear_bracket(&s, LagrangeLabel::L1).unwrap();
        assert!(lo > s.primary().x && hi < s.secondary().x);
        let (lo, _) = collinear_bracket(&s, LagrangeLabel::L2).unwrap();
        assert!(lo > s.secondary().x);
        let (_, hi) = collinear_bracket(&s, LagrangeLabel::L3).unwrap();
        assert!(hi < s.primary().x);
        assert!(collinear_bracket(&s, LagrangeLabel::L4).is_none());
    }

    #[test]
    fn heavy_secondary_swaps_l2_and_l3_sides() {
        let s = sys(0.9);
        let (_, hi) = collinear_bracket(&s, LagrangeLabel::L2).unwrap();
        assert!(hi < s.primary().x);
        let (lo, _) = collinear_bracket(&s, LagrangeLabel::L3).unwrap();
        assert!(lo > s.secondary().x);
    }

    #[test]
    fn triangular_points_are_mirrored() {
        let s = sys(0.2);
        let l4 = triangular(&s, LagrangeLabel::L4);
        let l5 = triangular(&s, LagrangeLabel::L5);
        assert_eq!(l4.position.x, 0.5 - 0.2);
        assert_eq!(l5.position, l4.position.reflect_x_axis());
        assert_eq!(l4.method, SolveMethod::ClosedForm);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let s = sys(0.1);
        let zero_tol = SolverConfig {
            tolerance: 0.0,
            ..SolverConfig::default()
        };
        assert!(solve_lagrange_points_with(&s, &zero_tol).is_err());
        let no_budget = SolverConfig {
            max_iterations: 0,
            ..SolverConfig::default()
        };
        assert!(solve_lagrange_points_with(&s, &no_budget).is_err());
    }

    #[test]
    fn solution_accessors() {
        let solution = solve_lagrange_points(&sys(0.1));
        assert!(solution.is_complete());
        assert_eq!(solution.converged().len(), 5);
        assert_eq!(solution.errors().count(), 0);
        for label in LagrangeLabel::ALL {
            assert_eq!(solution.point(label).unwrap().label, label);
        }
    }

    #[test]
    fn brackets_never_touch_a_mass() {
        for mu in [1e-40, 1e-300, f64::MIN_POSITIVE] {
            let s = sys(mu);
            let (_, hi) = collinear_bracket(&s, LagrangeLabel::L1).unwrap();
            let (lo, _) = collinear_bracket(&s, LagrangeLabel::L2).unwrap();
            assert!(hi < s.secondary().x && lo > s.secondary().x, "mu = {mu}");
            assert!(axis_derivative(&s, hi).is_finite());
            assert!(axis_derivative(&s, lo).is_finite());
        }
    }

    #[test]
    fn resolvable_gateways_are_not_snapped() {
        let s = sys(0.01);
        assert_eq!(unresolved_gateway(&s, LagrangeLabel::L1, 0.0, 0.98), None);
        let tiny = sys(1e-300);
        assert_eq!(unresolved_gateway(&tiny, LagrangeLabel::L3, -2.0, -0.5), None);
        assert_eq!(unresolved_gateway(&tiny, LagrangeLabel::L2, 1.5, 2.0), Some(1.5));
    }
}
