//! Effective-potential field evaluation for the circular restricted
//! three-body problem.
//!
//! In the frame co-rotating with two primaries (mass `1 - mu` at
//! `(-mu, 0)`, mass `mu` at `(1 - mu, 0)`), the effective potential of a
//! massless test particle is
//!
//! ```text
//! Φ(x, y) = -(1 - mu)/r1 - mu/r2 - (x² + y²)/2
//! ```
//!
//! This crate evaluates Φ over a [`SampleGrid`](hillmap_grid::SampleGrid)
//! into a [`PotentialField`], sequentially or across a worker pool, under
//! an explicit [`SingularityPolicy`]. Every value handed to a caller is
//! finite; cells that cannot hold a meaningful value are flagged as
//! excluded instead.
//!
//! It also provides the analytic gradient of Φ (used by the Lagrange
//! solver) and the [`Archipelago`] composite of several normalized
//! planetary wells on a log-polar grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod archipelago;
pub mod field;
pub mod gradient;
pub(crate) mod guard;
pub mod parallel;
pub mod policy;
pub mod potential;

pub use archipelago::{evaluate_archipelago, Archipelago, ArchipelagoParams, PlanetWell};
pub use field::PotentialField;
pub use gradient::{axis_derivative, potential_gradient};
pub use parallel::evaluate_potential_parallel;
pub use policy::{SingularityPolicy, EXCLUDED_SENTINEL, MIN_CLAMP_RADIUS};
pub use potential::{effective_potential, evaluate_potential, potential_with_policy};
