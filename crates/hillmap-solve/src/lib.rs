//! Equilibrium points of the circular restricted three-body problem.
//!
//! The three collinear points L1, L2, L3 are roots of `∂Φ/∂x` on the
//! x-axis, located with Brent's bracketed method ([`brent`]). The two
//! triangular points L4, L5 are closed form. Each collinear solve can
//! fail on its own; a [`LagrangeSolution`] always carries five labeled
//! results so one failure never hides the other four.
//!
//! [`CriticalLevels`] turns a solution into the potential values at the
//! gateways, which the map scenes draw as isolines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lagrange;
pub mod levels;
pub mod roots;

pub use lagrange::{
    collinear_bracket, solve_lagrange_points, solve_lagrange_points_with, LagrangeSolution,
    SolverConfig,
};
pub use levels::{approximate_collinear, CriticalLevels};
pub use roots::{brent, Root, RootError};
