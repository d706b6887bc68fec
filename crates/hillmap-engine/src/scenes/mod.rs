//! The map scenes.
//!
//! A [`Scene`] owns the physical and visual constants of one map and
//! implements two stages: [`evaluate`](Scene::evaluate) builds the grid,
//! the field and (for rotating-frame scenes) the Lagrange solution;
//! [`describe`](Scene::describe) turns that into a
//! [`RenderSpec`](hillmap_render::RenderSpec). The pipeline handles
//! rasterization, encoding and bookkeeping.

use std::time::Instant;

use hillmap_core::TwoBodySystem;
use hillmap_field::{evaluate_potential_parallel, PotentialField};
use hillmap_grid::{Bounds, LinearGrid};
use hillmap_render::RenderSpec;
use hillmap_solve::{solve_lagrange_points_with, CriticalLevels, LagrangeSolution};

use crate::config::{SceneConfig, SceneKind};
use crate::error::RunError;
use crate::metrics::{elapsed_us, RunMetrics};

mod archipelago;
mod earth_sun;
mod hill_zoom;

pub use archipelago::ArchipelagoScene;
pub use earth_sun::EarthSunScene;
pub use hill_zoom::HillZoomScene;

/// Result of a scene's evaluate stage.
#[derive(Clone, Debug)]
pub struct Evaluated {
    /// The evaluated field.
    pub field: PotentialField,
    /// Rectangle spanned by the field's cells, in the coordinates
    /// overlays are drawn in.
    pub bounds: Bounds,
    /// Lagrange points, for scenes in a single rotating frame.
    pub solution: Option<LagrangeSolution>,
    /// Φ at the solved points.
    pub levels: Option<CriticalLevels>,
}

/// One map.
pub trait Scene: Send + Sync {
    /// Which scene this is.
    fn kind(&self) -> SceneKind;

    /// Build the grid and evaluate everything the image needs.
    ///
    /// Implementations record grid, evaluate and solve timings into
    /// `metrics`.
    fn evaluate(&self, config: &SceneConfig, metrics: &mut RunMetrics) -> Result<Evaluated, RunError>;

    /// Describe the image for an evaluated scene.
    fn describe(&self, config: &SceneConfig, evaluated: &Evaluated) -> Result<RenderSpec, RunError>;
}

/// The scene for `kind`, with its default constants.
pub fn scene_for(kind: SceneKind) -> Box<dyn Scene> {
    match kind {
        SceneKind::EarthSun => Box::new(EarthSunScene::default()),
        SceneKind::HillZoom => Box::new(HillZoomScene::default()),
        SceneKind::Archipelago => Box::new(ArchipelagoScene::default()),
    }
}

/// Shared evaluate stage of the rotating-frame scenes: a linear grid
/// over `bounds`, the field, and the Lagrange solution.
pub(crate) fn evaluate_rotating_frame(
    system: &TwoBodySystem,
    bounds: Bounds,
    cols: usize,
    rows: usize,
    config: &SceneConfig,
    metrics: &mut RunMetrics,
) -> Result<Evaluated, RunError> {
    let t = Instant::now();
    let grid = LinearGrid::new(bounds, cols, rows)?;
    metrics.grid_us = elapsed_us(t);

    let t = Instant::now();
    let workers = config.resolved_worker_count();
    let field = evaluate_potential_parallel(system, &grid, config.policy, workers)?;
    metrics.evaluate_us = elapsed_us(t);
    tracing::debug!(cols, rows, workers, us = metrics.evaluate_us, "field evaluated");

    let t = Instant::now();
    let solution = solve_lagrange_points_with(system, &config.solver)?;
    metrics.solve_us = elapsed_us(t);
    for err in solution.errors() {
        tracing::warn!(%err, "Lagrange point not found");
    }
    let levels = CriticalLevels::from_solution(system, &solution);

    Ok(Evaluated {
        field,
        bounds,
        solution: Some(solution),
        levels: Some(levels),
    })
}
