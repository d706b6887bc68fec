//! Hillmap: topographic maps of the circular restricted three-body problem.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hillmap sub-crates. Depend on `hillmap` alone unless you need to
//! keep the dependency tree small.
//!
//! # Quick start
//!
//! ```rust
//! use hillmap::prelude::*;
//!
//! let system = TwoBodySystem::earth_sun();
//! let grid = LinearGrid::new(Bounds::square(1.5).unwrap(), 64, 64).unwrap();
//! let field = evaluate_potential(&system, &grid, SingularityPolicy::default()).unwrap();
//! assert_eq!(field.shape(), (64, 64));
//!
//! let solution = solve_lagrange_points(&system);
//! assert!(solution.is_complete());
//! let l1 = solution.position(LagrangeLabel::L1).unwrap();
//! assert!((l1.x - 0.99).abs() < 0.001);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hillmap-core` | Two-body system, points, labels, errors |
//! | [`grid`] | `hillmap-grid` | Bounds, linear and log-polar sample grids |
//! | [`field`] | `hillmap-field` | Effective potential, singularity policies, archipelago composite |
//! | [`solve`] | `hillmap-solve` | Brent root finder and Lagrange point solver |
//! | [`render`] | `hillmap-render` | Colormaps, filled bands, isolines, overlays, PNG output |
//! | [`engine`] | `hillmap-engine` | Scenes, run configuration, the render pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`hillmap-core`).
///
/// [`types::TwoBodySystem`] fixes the mass ratio and the positions of
/// both primaries in the rotating frame.
pub use hillmap_core as types;

/// Sampling grids (`hillmap-grid`).
///
/// [`grid::LinearGrid`] for rectangular windows, [`grid::LogPolarGrid`]
/// for the multi-planet map.
pub use hillmap_grid as grid;

/// Potential evaluation (`hillmap-field`).
pub use hillmap_field as field;

/// Lagrange point solver (`hillmap-solve`).
///
/// [`solve::solve_lagrange_points`] returns one result per point; a
/// failed collinear root does not hide the others.
pub use hillmap_solve as solve;

/// Rasterization and PNG output (`hillmap-render`).
pub use hillmap_render as render;

/// Scenes and the evaluate-solve-render pipeline (`hillmap-engine`).
///
/// [`engine::run_scene`] renders one named map to disk.
pub use hillmap_engine as engine;

/// Common imports for typical hillmap usage.
///
/// ```rust
/// use hillmap::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hillmap_core::{
        ConvergenceError, DomainError, LagrangeLabel, LagrangePoint, Point2, TwoBodySystem,
    };

    // Grids
    pub use hillmap_grid::{Bounds, LinearGrid, LogPolarGrid, SampleGrid};

    // Field
    pub use hillmap_field::{
        effective_potential, evaluate_potential, evaluate_potential_parallel, PotentialField,
        SingularityPolicy,
    };

    // Solver
    pub use hillmap_solve::{solve_lagrange_points, CriticalLevels, LagrangeSolution};

    // Render
    pub use hillmap_render::{render, save_png, Colormap, Levels, RenderSpec};

    // Engine
    pub use hillmap_engine::{run_scene, RunMetrics, SceneConfig, SceneKind};
}
