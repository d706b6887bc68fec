//! Rendering errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Failure to build or write an image.
#[derive(Debug)]
pub enum RenderError {
    /// A render parameter is out of range.
    InvalidSpec {
        /// Parameter name.
        name: &'static str,
        /// Description of the valid range.
        reason: String,
    },
    /// PNG encoding or the file write failed.
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Underlying image error.
        source: image::ImageError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpec { name, reason } => {
                write!(f, "invalid render parameter '{name}': {reason}")
            }
            Self::Encode { path, .. } => write!(f, "failed to write PNG to {}", path.display()),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            Self::InvalidSpec { .. } => None,
        }
    }
}
