//! Scene-level errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use hillmap_core::DomainError;
use hillmap_render::RenderError;

use crate::config::ConfigError;

/// Why a scene run failed.
#[derive(Debug)]
pub enum RunError {
    /// Run settings failed validation.
    Config(ConfigError),
    /// Physical or grid parameters of the scene are invalid.
    Domain(DomainError),
    /// Building or writing the image failed.
    Render(RenderError),
    /// The output directory could not be created.
    OutputDir {
        /// The directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Domain(e) => write!(f, "domain error: {e}"),
            Self::Render(e) => write!(f, "render error: {e}"),
            Self::OutputDir { path, .. } => {
                write!(f, "cannot create output directory {}", path.display())
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Domain(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::OutputDir { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DomainError> for RunError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<RenderError> for RunError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
