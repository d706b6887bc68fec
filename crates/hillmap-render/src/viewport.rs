//! World ↔ pixel mapping.

use hillmap_core::Point2;
use hillmap_grid::Bounds;

/// Maps a world-space rectangle onto an image of `width × height` pixels.
///
/// Pixel centres line up with grid samples: the world corner
/// `(x_min, y_max)` is the centre of pixel `(0, 0)` and `(x_max, y_min)`
/// is the centre of the bottom-right pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport. `width` and `height` are at least 2 for any
    /// image built from a field.
    pub fn new(bounds: Bounds, width: u32, height: u32) -> Self {
        Self {
            bounds,
            width,
            height,
        }
    }

    /// The world rectangle.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per world unit along x.
    pub fn x_scale(&self) -> f64 {
        f64::from(self.width.saturating_sub(1).max(1)) / self.bounds.width()
    }

    /// Pixels per world unit along y.
    pub fn y_scale(&self) -> f64 {
        f64::from(self.height.saturating_sub(1).max(1)) / self.bounds.height()
    }

    /// Fractional pixel position of a world point. May lie off-image.
    pub fn to_pixel(&self, p: Point2) -> (f64, f64) {
        (
            (p.x - self.bounds.x_min()) * self.x_scale(),
            (self.bounds.y_max() - p.y) * self.y_scale(),
        )
    }

    /// World point at the centre of pixel `(px, py)`.
    pub fn to_world(&self, px: f64, py: f64) -> Point2 {
        Point2::new(
            self.bounds.x_min() + px / self.x_scale(),
            self.bounds.y_max() - py / self.y_scale(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_corner_pixels() {
        let v = Viewport::new(Bounds::new(-1.0, 1.0, 0.0, 2.0).unwrap(), 101, 51);
        assert_eq!(v.to_pixel(Point2::new(-1.0, 2.0)), (0.0, 0.0));
        assert_eq!(v.to_pixel(Point2::new(1.0, 0.0)), (100.0, 50.0));
    }

    #[test]
    fn world_round_trip() {
        let v = Viewport::new(Bounds::square(3.0).unwrap(), 640, 480);
        let p = Point2::new(0.7, -1.2);
        let (px, py) = v.to_pixel(p);
        let q = v.to_world(px, py);
        assert!(p.distance(q) < 1e-12);
    }
}
