//! Handling of grid cells that coincide with a primary mass.

use hillmap_core::DomainError;

/// Value stored in excluded cells.
///
/// Finite, and no higher than the gravitational terms
/// `-(1-mu)/r1 - mu/r2` can reach under any accepted clamp radius (see
/// [`MIN_CLAMP_RADIUS`]), so a renderer that ignores the exclusion mask
/// still clips these cells to the bottom of its range.
pub const EXCLUDED_SENTINEL: f64 = -1.0e12;

/// Smallest `min_radius` a clamp policy accepts.
pub const MIN_CLAMP_RADIUS: f64 = 1.0e-12;

/// What to do where `r1` or `r2` approaches zero.
///
/// Φ diverges at both primaries. The policy decides whether such cells
/// get a clamped finite value or are flagged as excluded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SingularityPolicy {
    /// Floor both distances at `min_radius`. No cell is flagged.
    Clamp {
        /// Smallest distance used in the gravitational terms.
        min_radius: f64,
    },
    /// Flag cells closer than `radius` to either primary. Flagged cells
    /// hold [`EXCLUDED_SENTINEL`].
    Exclude {
        /// Exclusion radius around each primary.
        radius: f64,
    },
}

impl Default for SingularityPolicy {
    fn default() -> Self {
        Self::Clamp { min_radius: 1e-6 }
    }
}

impl SingularityPolicy {
    /// Check that the policy radius is finite and positive, and that a
    /// clamp radius is at least [`MIN_CLAMP_RADIUS`].
    pub fn validate(&self) -> Result<(), DomainError> {
        let (name, r) = match *self {
            Self::Clamp { min_radius } => ("min_radius", min_radius),
            Self::Exclude { radius } => ("radius", radius),
        };
        if !r.is_finite() || r <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name,
                reason: format!("must be finite and > 0, got {r}"),
            });
        }
        if self.clamps() && r < MIN_CLAMP_RADIUS {
            return Err(DomainError::InvalidParameter {
                name,
                reason: format!("must be at least {MIN_CLAMP_RADIUS:e}, got {r:e}"),
            });
        }
        Ok(())
    }

    /// Apply the policy to a pair of distances.
    ///
    /// Returns the distances to use, or `None` if the cell is excluded.
    pub fn apply(&self, r1: f64, r2: f64) -> Option<(f64, f64)> {
        match *self {
            Self::Clamp { min_radius } => Some((r1.max(min_radius), r2.max(min_radius))),
            Self::Exclude { radius } => {
                if r1 < radius || r2 < radius {
                    None
                } else {
                    Some((r1, r2))
                }
            }
        }
    }

    fn clamps(&self) -> bool {
        matches!(self, Self::Clamp { .. })
    }

    /// Whether this policy can flag cells.
    pub fn excludes(&self) -> bool {
        matches!(self, Self::Exclude { .. })
    }
}
