//! Planar positions in the rotating frame.

/// A position `(x, y)` in normalized rotating-frame units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    /// Coordinate along the line through both primaries.
    pub x: f64,
    /// Coordinate perpendicular to it, in the orbital plane.
    pub y: f64,
}

impl Point2 {
    /// The origin (system barycenter).
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared distance from the origin.
    pub fn norm_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Mirror image across the x-axis.
    pub fn reflect_x_axis(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Both coordinates multiplied by `k`, i.e. pushed along the ray
    /// from the origin.
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_3_4_5() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn scaling_moves_along_the_ray() {
        let p = Point2::new(0.4, -0.2).scaled(1.5);
        assert!((p.x - 0.6).abs() < 1e-15 && (p.y + 0.3).abs() < 1e-15);
        assert_eq!(Point2::ORIGIN.scaled(7.0), Point2::ORIGIN);
    }

    #[test]
    fn reflection_flips_y_only() {
        let p = Point2::new(0.5, 0.866).reflect_x_axis();
        assert_eq!(p, Point2::new(0.5, -0.866));
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            ax in -10.0f64..10.0, ay in -10.0f64..10.0,
            bx in -10.0f64..10.0, by in -10.0f64..10.0,
        ) {
            let a = Point2::new(ax, ay);
            let b = Point2::new(bx, by);
            prop_assert!((a.distance(b) - b.distance(a)).abs() < 1e-12);
            prop_assert!(a.distance(a).abs() < f64::EPSILON);
        }
    }
}
