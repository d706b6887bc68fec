//! Scene pipeline for hillmap.
//!
//! Each run goes configuration → grid → potential field → Lagrange
//! solve → render → PNG. [`SceneConfig`] holds the run-level settings
//! shared by every scene; each [`Scene`] carries its own physical and
//! visual constants and implements the evaluate and describe stages.
//! [`run_scene`] drives the stages, records [`RunMetrics`], and logs a
//! summary through `tracing`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod hash;
pub mod metrics;
pub mod pipeline;
pub mod scenes;

pub use config::{ConfigError, SceneConfig, SceneKind};
pub use error::RunError;
pub use hash::{config_hash, field_hash};
pub use metrics::RunMetrics;
pub use pipeline::{render_scene, run_all, run_scene, SceneOutput};
pub use scenes::{scene_for, ArchipelagoScene, EarthSunScene, Evaluated, HillZoomScene, Scene};
