//! `hillmap`: render topographic maps of the CR3BP effective potential.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hillmap_engine::{run_all, run_scene, SceneConfig, SceneKind};
use hillmap_field::SingularityPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hillmap", version)]
#[command(about = "Render topographic maps of the restricted three-body effective potential")]
struct Cli {
    /// Scene to render: earth-sun, hill-zoom, archipelago, or all
    #[arg(default_value = "earth-sun")]
    scene: String,

    /// Directory PNGs are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Resolution multiplier (0, 4]
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Worker threads for field evaluation (default: auto)
    #[arg(short, long)]
    workers: Option<usize>,

    /// How cells at a primary are handled
    #[arg(long, value_enum, default_value_t = PolicyArg::Clamp)]
    policy: PolicyArg,

    /// Clamp floor or exclusion radius
    #[arg(long)]
    radius: Option<f64>,

    /// Seed for decorative scatter
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Floor distances at a minimum radius
    Clamp,
    /// Drop cells within a radius of either primary
    Exclude,
}

impl Cli {
    fn policy(&self) -> SingularityPolicy {
        match (self.policy, self.radius) {
            (PolicyArg::Clamp, None) => SingularityPolicy::default(),
            (PolicyArg::Clamp, Some(min_radius)) => SingularityPolicy::Clamp { min_radius },
            (PolicyArg::Exclude, radius) => SingularityPolicy::Exclude {
                radius: radius.unwrap_or(0.01),
            },
        }
    }

    fn config(&self) -> SceneConfig {
        SceneConfig {
            output_dir: self.output.clone(),
            scale: self.scale,
            workers: self.workers,
            policy: self.policy(),
            seed: self.seed,
            ..SceneConfig::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid settings")?;
    tracing::debug!(?config, scene = %cli.scene, "starting");

    let outputs = if cli.scene == "all" {
        run_all(&config).context("rendering all scenes")?
    } else {
        let kind: SceneKind = cli.scene.parse()?;
        vec![run_scene(kind, &config).with_context(|| format!("rendering {kind}"))?]
    };

    for out in &outputs {
        if let Some(path) = &out.path {
            println!("{}", path.display());
        }
    }
    tracing::info!(scenes = outputs.len(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_scene_config() {
        let cli = Cli::parse_from(["hillmap"]);
        assert_eq!(cli.scene, "earth-sun");
        assert_eq!(cli.config(), SceneConfig::default());
    }

    #[test]
    fn exclude_policy_takes_radius() {
        let cli = Cli::parse_from(["hillmap", "hill-zoom", "--policy", "exclude", "--radius", "0.002"]);
        assert_eq!(cli.policy(), SingularityPolicy::Exclude { radius: 0.002 });
    }

    #[test]
    fn clamp_radius_overrides_floor() {
        let cli = Cli::parse_from(["hillmap", "--radius", "1e-4", "--scale", "0.5", "-w", "3"]);
        let cfg = cli.config();
        assert_eq!(cfg.policy, SingularityPolicy::Clamp { min_radius: 1e-4 });
        assert_eq!(cfg.scale, 0.5);
        assert_eq!(cfg.workers, Some(3));
    }
}
