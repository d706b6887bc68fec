//! Run configuration, validation, and error types.
//!
//! [`SceneConfig`] carries the settings that apply to every scene:
//! output location, resolution scale, worker pool size, singularity
//! policy, solver settings and RNG seed. [`validate()`](SceneConfig::validate)
//! checks them before any grid is built.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use hillmap_core::DomainError;
use hillmap_field::SingularityPolicy;
use hillmap_solve::SolverConfig;

// ── SceneKind ──────────────────────────────────────────────────────

/// The map scenes this crate knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Whole Earth–Sun system with all five Lagrange points.
    EarthSun,
    /// Earth's Hill sphere and the L1/L2 gateways.
    HillZoom,
    /// Normalized wells of five planets on a log-polar map.
    Archipelago,
}

impl SceneKind {
    /// Every scene, in rendering order.
    pub const ALL: [SceneKind; 3] = [Self::EarthSun, Self::HillZoom, Self::Archipelago];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::EarthSun => "earth-sun",
            Self::HillZoom => "hill-zoom",
            Self::Archipelago => "archipelago",
        }
    }

    /// Output file name.
    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ConfigError::UnknownScene {
                name: s.to_string(),
            })
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SceneConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No scene with this name.
    UnknownScene {
        /// The name that was given.
        name: String,
    },
    /// Resolution scale is NaN, infinite, or outside `(0, 4]`.
    InvalidScale {
        /// The invalid value.
        value: f64,
    },
    /// An explicit worker count of zero.
    ZeroWorkers,
    /// The singularity policy radius is invalid.
    Policy(DomainError),
    /// The root-finder settings are invalid.
    Solver(DomainError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScene { name } => {
                let known: Vec<_> = SceneKind::ALL.iter().map(|k| k.name()).collect();
                write!(f, "unknown scene '{name}' (expected one of {})", known.join(", "))
            }
            Self::InvalidScale { value } => {
                write!(f, "resolution scale must be in (0, 4], got {value}")
            }
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
            Self::Policy(e) => write!(f, "singularity policy: {e}"),
            Self::Solver(e) => write!(f, "solver: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Policy(e) | Self::Solver(e) => Some(e),
            _ => None,
        }
    }
}

// ── SceneConfig ────────────────────────────────────────────────────

/// Largest accepted resolution scale.
pub const MAX_SCALE: f64 = 4.0;

/// Settings shared by every scene run.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Directory PNGs are written to. Created if missing. Default: `.`.
    pub output_dir: PathBuf,
    /// Multiplier on each scene's native resolution and pixel sizes.
    /// Default: 1.0.
    pub scale: f64,
    /// Worker threads for field evaluation. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub workers: Option<usize>,
    /// How cells at a primary are handled. Default: clamp at 1e-6.
    pub policy: SingularityPolicy,
    /// Root-finder settings for L1, L2, L3.
    pub solver: SolverConfig,
    /// Seed for decorative scatter. Default: 42.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            scale: 1.0,
            workers: None,
            policy: SingularityPolicy::default(),
            solver: SolverConfig::default(),
            seed: 42,
        }
    }
}

impl SceneConfig {
    /// Validate every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > MAX_SCALE {
            return Err(ConfigError::InvalidScale { value: self.scale });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        self.policy.validate().map_err(ConfigError::Policy)?;
        self.solver.validate().map_err(ConfigError::Solver)?;
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }

    /// Scale a native sample count. Never below 2.
    pub fn scaled(&self, native: usize) -> usize {
        ((native as f64 * self.scale).round() as usize).max(2)
    }

    /// Scale a native pixel length. Never below 1.
    pub fn scaled_px(&self, native: f64) -> f64 {
        (native * self.scale).max(1.0)
    }

    /// Scale a native stroke width. Never below 1.
    pub fn scaled_stroke(&self, native: u32) -> u32 {
        ((f64::from(native) * self.scale).round() as u32).max(1)
    }

    /// Scale a native glyph scale for text overlays. Never below 1.
    pub fn scaled_glyph(&self, native: u32) -> u32 {
        self.scaled_stroke(native)
    }

    /// Path the given scene is written to.
    pub fn output_path(&self, kind: SceneKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }
}
