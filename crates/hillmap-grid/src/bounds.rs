//! Axis-aligned rectangular domains.

use hillmap_core::{Axis, DomainError, Point2};

/// A finite, non-degenerate rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    /// Create bounds, rejecting non-finite values and `min >= max`.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, DomainError> {
        check_axis(Axis::X, x_min, x_max)?;
        check_axis(Axis::Y, y_min, y_max)?;
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Bounds centred on `center` with the given half-extents.
    pub fn centered(center: Point2, half_width: f64, half_height: f64) -> Result<Self, DomainError> {
        Self::new(
            center.x - half_width,
            center.x + half_width,
            center.y - half_height,
            center.y + half_height,
        )
    }

    /// The square `[-half, half]²`.
    pub fn square(half: f64) -> Result<Self, DomainError> {
        Self::centered(Point2::ORIGIN, half, half)
    }

    /// Lower x bound.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper x bound.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Lower y bound.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Upper y bound.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `p` lies inside (edges included).
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), DomainError> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(DomainError::DegenerateBounds { axis, min, max });
    }
    // A span that overflows is as unusable as an empty one.
    if !(max - min).is_finite() {
        return Err(DomainError::DegenerateBounds { axis, min, max });
    }
    Ok(())
}
