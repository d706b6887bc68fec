//! Bitmap text for labels and titles.
//!
//! Glyphs come from the 8×8 `font8x8` set and are scaled by whole
//! pixels, so text stays crisp at every resolution. Characters outside
//! the basic Latin block draw as `?`.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::canvas::Canvas;

/// Side of one unscaled glyph cell, in pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Horizontal placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centred on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

impl TextAnchor {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Middle => 0.5,
            Self::End => 1.0,
        }
    }
}

/// Width of the widest line of `text` in pixels at glyph scale `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    widest as u32 * GLYPH_SIZE * scale.max(1)
}

/// Height of `text` in pixels at glyph scale `scale`, one glyph cell per line.
pub fn text_height(text: &str, scale: u32) -> u32 {
    text.lines().count() as u32 * GLYPH_SIZE * scale.max(1)
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Cover the pixels of `text`, vertically centred on `at.1`.
///
/// Each line of a multi-line string is anchored separately, so centred
/// titles stay centred line by line.
pub(crate) fn cover_text(canvas: &mut Canvas, at: (f64, f64), text: &str, scale: u32, anchor: TextAnchor) {
    let scale = i64::from(scale.max(1));
    let cell = i64::from(GLYPH_SIZE) * scale;
    let top = (at.1 - f64::from(text_height(text, scale as u32)) / 2.0).round() as i64;
    for (line_no, line) in text.lines().enumerate() {
        let width = f64::from(text_width(line, scale as u32));
        let left = (at.0 - width * anchor.fraction()).round() as i64;
        let y0 = top + line_no as i64 * cell;
        for (col, c) in line.chars().enumerate() {
            let x0 = left + col as i64 * cell;
            for (row, bits) in glyph(c).iter().enumerate() {
                for bit in 0..8 {
                    if bits & (1 << bit) == 0 {
                        continue;
                    }
                    let (px, py) = (x0 + bit * scale, y0 + row as i64 * scale);
                    for dy in 0..scale {
                        for dx in 0..scale {
                            canvas.cover(px + dx, py + dy);
                        }
                    }
                }
            }
        }
    }
}
