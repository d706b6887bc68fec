//! Isolines by sign change between neighbouring cells.

use hillmap_field::PotentialField;
use image::Rgb;

use crate::canvas::Canvas;

/// One isoline to draw over the filled bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Isoline {
    /// Potential value of the line.
    pub level: f64,
    /// Line color.
    pub color: Rgb<u8>,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Line width in pixels.
    pub thickness: u32,
}

impl Isoline {
    /// An opaque 1-pixel line.
    pub fn new(level: f64, color: Rgb<u8>) -> Self {
        Self {
            level,
            color,
            alpha: 1.0,
            thickness: 1,
        }
    }

    /// Set the opacity.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the line width.
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }
}

/// Cover every pixel whose cell and right or upper neighbour straddle
/// `level`. Excluded cells never contribute.
pub(crate) fn cover_isoline(canvas: &mut Canvas, field: &PotentialField, line: &Isoline) {
    let (rows, cols) = field.shape();
    let above = |row: usize, col: usize| field.get(row, col).map(|v| v >= line.level);
    for row in 0..rows {
        for col in 0..cols {
            let Some(here) = above(row, col) else {
                continue;
            };
            let right = (col + 1 < cols).then(|| above(row, col + 1)).flatten();
            let up = (row + 1 < rows).then(|| above(row + 1, col)).flatten();
            if right.is_some_and(|r| r != here) || up.is_some_and(|u| u != here) {
                let y = (rows - 1 - row) as i64;
                canvas.cover_brush(col as i64, y, line.thickness);
            }
        }
    }
}

/// Draw `line` onto `canvas`.
pub(crate) fn draw_isoline(canvas: &mut Canvas, field: &PotentialField, line: &Isoline) {
    cover_isoline(canvas, field, line);
    canvas.fill_covered(line.color, line.alpha);
}
