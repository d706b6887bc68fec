//! Potential values at the equilibria.
//!
//! The zero-velocity curve through a collinear point is the gateway
//! through which a particle with that energy can leave the region
//! around a primary. Maps draw these levels as isolines.

use hillmap_core::{LagrangeLabel, Point2, TwoBodySystem};
use hillmap_field::effective_potential;

use crate::lagrange::LagrangeSolution;

/// Φ at each Lagrange point that was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalLevels {
    levels: [Option<f64>; 5],
}

impl CriticalLevels {
    /// Evaluate Φ at every converged point of `solution`.
    pub fn from_solution(system: &TwoBodySystem, solution: &LagrangeSolution) -> Self {
        let levels = LagrangeLabel::ALL
            .map(|label| solution.position(label).map(|p| effective_potential(system, p)));
        Self { levels }
    }

    /// Φ at `label`, if that point converged.
    pub fn get(&self, label: LagrangeLabel) -> Option<f64> {
        self.levels[label.index()]
    }

    /// Jacobi constant `C = -2Φ` at `label`.
    pub fn jacobi_constant(&self, label: LagrangeLabel) -> Option<f64> {
        self.get(label).map(|phi| -2.0 * phi)
    }

    /// Known levels, lowest first, with their labels.
    pub fn ascending(&self) -> Vec<(LagrangeLabel, f64)> {
        let mut out: Vec<_> = LagrangeLabel::ALL
            .into_iter()
            .filter_map(|l| self.get(l).map(|v| (l, v)))
            .collect();
        out.sort_by(|a, b| a.1.total_cmp(&b.1));
        out
    }
}

/// Hill-sphere approximations of L1, L2, L3 for a small mass ratio.
///
/// `L1 ≈ x2 - h`, `L2 ≈ x2 + h`, `L3 ≈ -1 - 5mu/12`, with `h = (mu/3)^(1/3)`
/// and `x2` the position of mass 2. Accurate to `O(h²)`; only meaningful
/// when mass 2 is much lighter than mass 1.
pub fn approximate_collinear(system: &TwoBodySystem) -> [Point2; 3] {
    let h = system.hill_radius();
    let x2 = system.secondary().x;
    [
        Point2::new(x2 - h, 0.0),
        Point2::new(x2 + h, 0.0),
        Point2::new(-1.0 - 5.0 * system.mu() / 12.0, 0.0),
    ]
}
