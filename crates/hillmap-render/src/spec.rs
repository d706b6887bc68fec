//! Render descriptions and the top-level render entry points.

use std::path::Path;

use hillmap_field::PotentialField;
use hillmap_grid::Bounds;
use image::{ImageFormat, Rgb, RgbImage};

use crate::canvas::Canvas;
use crate::colormap::Colormap;
use crate::contour::{draw_isoline, Isoline};
use crate::error::RenderError;
use crate::overlay::Overlay;
use crate::raster::{fill_bands, Levels};
use crate::viewport::Viewport;

/// Everything needed to turn a field into an image.
///
/// Built with [`RenderSpec::new`] and the `with_*` methods. Layers are
/// composited in order: filled bands, isolines, overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSpec {
    /// Palette for the filled bands.
    pub colormap: Colormap,
    /// Clip window and band count.
    pub levels: Levels,
    /// Color of excluded cells.
    pub background: Rgb<u8>,
    /// Isolines, drawn in order.
    pub isolines: Vec<Isoline>,
    /// Overlays, drawn in order after the isolines.
    pub overlays: Vec<Overlay>,
}

impl RenderSpec {
    /// Bands only, black background.
    pub fn new(colormap: Colormap, levels: Levels) -> Self {
        Self {
            colormap,
            levels,
            background: Rgb([0, 0, 0]),
            isolines: Vec::new(),
            overlays: Vec::new(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Rgb<u8>) -> Self {
        self.background = color;
        self
    }

    /// Add an isoline.
    pub fn with_isoline(mut self, line: Isoline) -> Self {
        self.isolines.push(line);
        self
    }

    /// Add several isolines.
    pub fn with_isolines(mut self, lines: impl IntoIterator<Item = Isoline>) -> Self {
        self.isolines.extend(lines);
        self
    }

    /// Add an overlay.
    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Add several overlays.
    pub fn with_overlays(mut self, overlays: impl IntoIterator<Item = Overlay>) -> Self {
        self.overlays.extend(overlays);
        self
    }

    /// Check alphas and isoline levels.
    pub fn validate(&self) -> Result<(), RenderError> {
        for line in &self.isolines {
            if !line.level.is_finite() {
                return Err(RenderError::InvalidSpec {
                    name: "isoline",
                    reason: format!("level must be finite, got {}", line.level),
                });
            }
            check_alpha(line.alpha)?;
        }
        for overlay in &self.overlays {
            match overlay {
                Overlay::Disc { alpha, .. }
                | Overlay::Ellipse { alpha, .. }
                | Overlay::Segment { alpha, .. }
                | Overlay::Label { alpha, .. }
                | Overlay::Scatter { alpha, .. } => check_alpha(*alpha)?,
                Overlay::Marker { .. } | Overlay::Title { .. } => {}
            }
        }
        Ok(())
    }
}

fn check_alpha(alpha: f64) -> Result<(), RenderError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(RenderError::InvalidSpec {
            name: "alpha",
            reason: format!("must lie in [0, 1], got {alpha}"),
        })
    }
}

/// Render `field`, whose cells span `bounds`, one pixel per cell.
///
/// # Examples
///
/// ```
/// use hillmap_core::TwoBodySystem;
/// use hillmap_field::{evaluate_potential, SingularityPolicy};
/// use hillmap_grid::{Bounds, LinearGrid};
/// use hillmap_render::{render, Colormap, Levels, RenderSpec};
///
/// let bounds = Bounds::square(1.5).unwrap();
/// let grid = LinearGrid::new(bounds, 64, 48).unwrap();
/// let sys = TwoBodySystem::new(0.1).unwrap();
/// let field = evaluate_potential(&sys, &grid, SingularityPolicy::default()).unwrap();
///
/// let spec = RenderSpec::new(Colormap::Magma, Levels::new(-3.0, -1.4, 40).unwrap());
/// let image = render(&field, &bounds, &spec).unwrap();
/// assert_eq!(image.dimensions(), (64, 48));
/// ```
pub fn render(field: &PotentialField, bounds: &Bounds, spec: &RenderSpec) -> Result<RgbImage, RenderError> {
    spec.validate()?;
    let image = fill_bands(field, &spec.levels, spec.colormap, spec.background);
    let viewport = Viewport::new(*bounds, image.width(), image.height());
    let mut canvas = Canvas::new(image);
    for line in &spec.isolines {
        draw_isoline(&mut canvas, field, line);
    }
    for overlay in &spec.overlays {
        overlay.draw(&mut canvas, &viewport);
    }
    tracing::trace!(
        isolines = spec.isolines.len(),
        overlays = spec.overlays.len(),
        "rendered field"
    );
    Ok(canvas.into_image())
}

/// Write `image` to `path` as PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
