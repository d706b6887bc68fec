//! Annotations drawn over the topography.
//!
//! Positions and world-space lengths go through the [`Viewport`];
//! marker sizes, disc radii and line widths are in pixels so they read
//! the same at any zoom level.

use std::f64::consts::TAU;

use hillmap_core::Point2;
use image::Rgb;

use crate::canvas::Canvas;
use crate::text::{cover_text, TextAnchor, GLYPH_SIZE};
use crate::viewport::Viewport;

/// Segments per ellipse or ring outline.
const OUTLINE_SEGMENTS: usize = 360;

/// Shape of a point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    /// Diagonal cross (×).
    Cross,
    /// Upright cross (+).
    Plus,
}

/// One annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    /// A point marker.
    Marker {
        /// World position.
        at: Point2,
        /// Shape.
        shape: MarkerShape,
        /// Arm length in pixels from the centre.
        size: f64,
        /// Stroke width in pixels.
        thickness: u32,
        /// Color.
        color: Rgb<u8>,
    },
    /// A filled disc of fixed pixel radius, e.g. a planet.
    Disc {
        /// World position of the centre.
        center: Point2,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Rgb<u8>,
        /// Opacity.
        alpha: f64,
    },
    /// An axis-aligned ellipse outline with world-space semi-axes.
    Ellipse {
        /// World position of the centre.
        center: Point2,
        /// Semi-axis along x (world units).
        semi_x: f64,
        /// Semi-axis along y (world units).
        semi_y: f64,
        /// Stroke width in pixels.
        thickness: u32,
        /// Dashed outline.
        dashed: bool,
        /// Color.
        color: Rgb<u8>,
        /// Opacity.
        alpha: f64,
    },
    /// A straight segment between two world points.
    Segment {
        /// Start.
        from: Point2,
        /// End.
        to: Point2,
        /// Stroke width in pixels.
        thickness: u32,
        /// Color.
        color: Rgb<u8>,
        /// Opacity.
        alpha: f64,
    },
    /// Text anchored at a world position.
    Label {
        /// World position of the anchor.
        at: Point2,
        /// The text. `\n` starts a new line.
        text: String,
        /// Glyph scale; 1 draws 8-pixel glyphs.
        size: u32,
        /// Horizontal placement relative to `at`.
        anchor: TextAnchor,
        /// Color.
        color: Rgb<u8>,
        /// Opacity.
        alpha: f64,
    },
    /// Text centred across the top of the image.
    Title {
        /// The text. `\n` starts a new line.
        text: String,
        /// Glyph scale.
        size: u32,
        /// Color.
        color: Rgb<u8>,
    },
    /// A cloud of small dots.
    Scatter {
        /// World positions.
        points: Vec<Point2>,
        /// Dot radius in pixels.
        radius: f64,
        /// Color.
        color: Rgb<u8>,
        /// Opacity.
        alpha: f64,
    },
}

impl Overlay {
    /// An opaque marker.
    pub fn marker(at: Point2, shape: MarkerShape, size: f64, thickness: u32, color: Rgb<u8>) -> Self {
        Self::Marker {
            at,
            shape,
            size,
            thickness,
            color,
        }
    }

    /// An opaque disc.
    pub fn disc(center: Point2, radius: f64, color: Rgb<u8>) -> Self {
        Self::Disc {
            center,
            radius,
            color,
            alpha: 1.0,
        }
    }

    /// Opaque text centred on `at`.
    pub fn label(at: Point2, text: impl Into<String>, size: u32, color: Rgb<u8>) -> Self {
        Self::Label {
            at,
            text: text.into(),
            size,
            anchor: TextAnchor::Middle,
            color,
            alpha: 1.0,
        }
    }

    /// A title across the top of the image.
    pub fn title(text: impl Into<String>, size: u32, color: Rgb<u8>) -> Self {
        Self::Title {
            text: text.into(),
            size,
            color,
        }
    }

    /// A circle of world radius `radius`, drawn as an ellipse.
    pub fn ring(center: Point2, radius: f64, thickness: u32, color: Rgb<u8>, alpha: f64) -> Self {
        Self::Ellipse {
            center,
            semi_x: radius,
            semi_y: radius,
            thickness,
            dashed: false,
            color,
            alpha,
        }
    }

    /// Draw this overlay onto `canvas`.
    pub(crate) fn draw(&self, canvas: &mut Canvas, viewport: &Viewport) {
        let (color, alpha) = match self {
            Self::Marker { at, shape, size, thickness, color } => {
                let (cx, cy) = viewport.to_pixel(*at);
                let arms = match shape {
                    MarkerShape::Plus => [((-size, 0.0), (*size, 0.0)), ((0.0, -size), (0.0, *size))],
                    MarkerShape::Cross => [((-size, -size), (*size, *size)), ((-size, *size), (*size, -size))],
                };
                for ((x0, y0), (x1, y1)) in arms {
                    canvas.cover_line((cx + x0, cy + y0), (cx + x1, cy + y1), *thickness);
                }
                (*color, 1.0)
            }
            Self::Disc { center, radius, color, alpha } => {
                canvas.cover_disc(viewport.to_pixel(*center), *radius);
                (*color, *alpha)
            }
            Self::Ellipse { center, semi_x, semi_y, thickness, dashed, color, alpha } => {
                let outline: Vec<(f64, f64)> = (0..=OUTLINE_SEGMENTS)
                    .map(|i| {
                        let t = TAU * i as f64 / OUTLINE_SEGMENTS as f64;
                        viewport.to_pixel(Point2::new(center.x + semi_x * t.cos(), center.y + semi_y * t.sin()))
                    })
                    .collect();
                let dash = dashed.then_some((6, 4));
                canvas.cover_polyline(&outline, *thickness, dash);
                (*color, *alpha)
            }
            Self::Segment { from, to, thickness, color, alpha } => {
                canvas.cover_line(viewport.to_pixel(*from), viewport.to_pixel(*to), *thickness);
                (*color, *alpha)
            }
            Self::Label { at, text, size, anchor, color, alpha } => {
                cover_text(canvas, viewport.to_pixel(*at), text, *size, *anchor);
                (*color, *alpha)
            }
            Self::Title { text, size, color } => {
                // One blank glyph row of margin above the first line.
                let lines = text.lines().count() as f64;
                let cell = f64::from(GLYPH_SIZE * (*size).max(1));
                let centre = (f64::from(viewport.width()) / 2.0, cell * (1.0 + lines / 2.0));
                cover_text(canvas, centre, text, *size, TextAnchor::Middle);
                (*color, 1.0)
            }
            Self::Scatter { points, radius, color, alpha } => {
                for p in points {
                    canvas.cover_disc(viewport.to_pixel(*p), *radius);
                }
                (*color, *alpha)
            }
        };
        canvas.fill_covered(color, alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillmap_grid::Bounds;
    use image::RgbImage;

    fn setup() -> (Canvas, Viewport) {
        let vp = Viewport::new(Bounds::square(1.0).unwrap(), 101, 101);
        (Canvas::new(RgbImage::new(101, 101)), vp)
    }

    #[test]
    fn plus_marker_is_centred() {
        let (mut c, vp) = setup();
        let white = Rgb([255, 255, 255]);
        Overlay::marker(Point2::ORIGIN, MarkerShape::Plus, 5.0, 1, white).draw(&mut c, &vp);
        assert_eq!(*c.image().get_pixel(50, 50), white);
        assert_eq!(*c.image().get_pixel(55, 50), white);
        assert_eq!(*c.image().get_pixel(50, 45), white);
        assert_eq!(*c.image().get_pixel(53, 53), Rgb([0, 0, 0]));
    }

    #[test]
    fn cross_marker_hits_diagonals() {
        let (mut c, vp) = setup();
        let red = Rgb([255, 0, 0]);
        Overlay::marker(Point2::ORIGIN, MarkerShape::Cross, 4.0, 1, red).draw(&mut c, &vp);
        assert_eq!(*c.image().get_pixel(53, 53), red);
        assert_eq!(*c.image().get_pixel(47, 53), red);
        assert_eq!(*c.image().get_pixel(54, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn ring_passes_through_its_radius() {
        let (mut c, vp) = setup();
        let white = Rgb([255, 255, 255]);
        Overlay::ring(Point2::ORIGIN, 0.5, 1, white, 1.0).draw(&mut c, &vp);
        assert_eq!(*c.image().get_pixel(75, 50), white);
        assert_eq!(*c.image().get_pixel(50, 25), white);
        assert_eq!(*c.image().get_pixel(50, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn translucent_segment_blends() {
        let (mut c, vp) = setup();
        Overlay::Segment {
            from: Point2::new(-1.0, 0.0),
            to: Point2::new(1.0, 0.0),
            thickness: 1,
            color: Rgb([200, 200, 200]),
            alpha: 0.5,
        }
        .draw(&mut c, &vp);
        assert_eq!(*c.image().get_pixel(0, 50), Rgb([100, 100, 100]));
        assert_eq!(*c.image().get_pixel(100, 50), Rgb([100, 100, 100]));
    }

    #[test]
    fn label_is_drawn_around_its_world_anchor() {
        let (mut c, vp) = setup();
        let white = Rgb([255, 255, 255]);
        Overlay::label(Point2::new(0.5, 0.5), "L4", 1, white).draw(&mut c, &vp);
        let lit: Vec<_> = c
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == white)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        // World (0.5, 0.5) is pixel (75, 25); "L4" spans 16 × 8 around it.
        assert!(lit.iter().all(|&(x, y)| (67..83).contains(&x) && (21..29).contains(&y)));
    }

    #[test]
    fn translucent_label_blends() {
        let (mut c, vp) = setup();
        Overlay::Label {
            at: Point2::ORIGIN,
            text: "#".to_string(),
            size: 2,
            anchor: TextAnchor::Start,
            color: Rgb([200, 0, 0]),
            alpha: 0.5,
        }
        .draw(&mut c, &vp);
        let tinted = c.image().pixels().filter(|p| **p == Rgb([100, 0, 0])).count();
        assert!(tinted > 0);
        assert!(c.image().pixels().all(|p| *p == Rgb([100, 0, 0]) || *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn title_sits_at_the_top() {
        let (mut c, vp) = setup();
        let white = Rgb([255, 255, 255]);
        Overlay::title("Hill", 1, white).draw(&mut c, &vp);
        let rows: Vec<u32> = c
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == white)
            .map(|(_, y, _)| y)
            .collect();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&y| (8..16).contains(&y)), "rows {rows:?}");
    }

    #[test]
    fn scatter_and_disc_cover_pixels() {
        let (mut c, vp) = setup();
        let green = Rgb([0, 255, 0]);
        Overlay::Scatter {
            points: vec![Point2::new(0.5, 0.5), Point2::new(-0.5, -0.5)],
            radius: 1.0,
            color: green,
            alpha: 1.0,
        }
        .draw(&mut c, &vp);
        assert_eq!(*c.image().get_pixel(75, 25), green);
        assert_eq!(*c.image().get_pixel(25, 75), green);
        Overlay::disc(Point2::ORIGIN, 3.0, green).draw(&mut c, &vp);
        assert_eq!(*c.image().get_pixel(52, 50), green);
    }
}
