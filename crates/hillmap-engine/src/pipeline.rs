//! The evaluate → describe → render → encode pipeline.

use std::path::PathBuf;
use std::time::Instant;

use hillmap_render::{render, save_png};
use image::RgbImage;

use crate::config::{SceneConfig, SceneKind};
use crate::error::RunError;
use crate::hash::{config_hash, field_hash};
use crate::metrics::{elapsed_us, RunMetrics};
use crate::scenes::{scene_for, Evaluated};

/// Everything produced by one scene run.
#[derive(Clone, Debug)]
pub struct SceneOutput {
    /// Which scene ran.
    pub kind: SceneKind,
    /// Field, bounds and Lagrange solution.
    pub evaluated: Evaluated,
    /// The rendered image.
    pub image: RgbImage,
    /// Timings and counts.
    pub metrics: RunMetrics,
    /// Where the PNG was written, if it was.
    pub path: Option<PathBuf>,
}

/// Evaluate and render `kind` in memory, without writing anything.
pub fn render_scene(kind: SceneKind, config: &SceneConfig) -> Result<SceneOutput, RunError> {
    config.validate()?;
    let span = tracing::info_span!("scene", scene = %kind);
    let _enter = span.enter();

    let start = Instant::now();
    let scene = scene_for(kind);
    let mut metrics = RunMetrics::default();

    let evaluated = scene.evaluate(config, &mut metrics)?;
    metrics.cell_count = evaluated.field.len();
    metrics.excluded_cells = evaluated.field.excluded_count();
    metrics.guarded_cells = evaluated.field.guarded_count();
    metrics.converged_points = evaluated
        .solution
        .as_ref()
        .map_or(0, |s| s.converged().len());
    metrics.field_hash = field_hash(&evaluated.field);
    if metrics.guarded_cells > 0 {
        tracing::warn!(cells = metrics.guarded_cells, "non-finite cells excluded");
    }

    let spec = scene.describe(config, &evaluated)?;
    let t = Instant::now();
    let image = render(&evaluated.field, &evaluated.bounds, &spec)?;
    metrics.render_us = elapsed_us(t);
    metrics.total_us = elapsed_us(start);

    Ok(SceneOutput {
        kind,
        evaluated,
        image,
        metrics,
        path: None,
    })
}

/// Run `kind` end to end and write its PNG under `config.output_dir`.
pub fn run_scene(kind: SceneKind, config: &SceneConfig) -> Result<SceneOutput, RunError> {
    let start = Instant::now();
    let mut output = render_scene(kind, config)?;

    std::fs::create_dir_all(&config.output_dir).map_err(|source| RunError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;
    let path = config.output_path(kind);
    let t = Instant::now();
    save_png(&output.image, &path)?;
    output.metrics.encode_us = elapsed_us(t);
    output.metrics.total_us = elapsed_us(start);

    let m = &output.metrics;
    tracing::info!(
        scene = %kind,
        path = %path.display(),
        width = output.image.width(),
        height = output.image.height(),
        cells = m.cell_count,
        excluded = m.excluded_cells,
        lagrange_points = m.converged_points,
        evaluate_us = m.evaluate_us,
        solve_us = m.solve_us,
        render_us = m.render_us,
        encode_us = m.encode_us,
        total_us = m.total_us,
        field_hash = %format_args!("{:016x}", m.field_hash),
        config_hash = %format_args!("{:016x}", config_hash(kind, config)),
        "scene written"
    );
    output.path = Some(path);
    Ok(output)
}

/// Run every scene in [`SceneKind::ALL`] order, stopping at the first
/// failure.
pub fn run_all(config: &SceneConfig) -> Result<Vec<SceneOutput>, RunError> {
    SceneKind::ALL
        .iter()
        .map(|&kind| run_scene(kind, config))
        .collect()
}
