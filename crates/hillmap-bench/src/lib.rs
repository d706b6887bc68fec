//! Benchmark profiles for hillmap.
//!
//! - [`reference_profile`]: Earth–Sun system over the whole-system window,
//!   256×144 cells (~37K)
//! - [`stress_profile`]: same window at 1280×720 (~920K cells)
//! - [`zoom_profile`]: the Hill-sphere window around Earth, 354×200 cells

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hillmap_core::{DomainError, TwoBodySystem};
use hillmap_field::{evaluate_potential, PotentialField, SingularityPolicy};
use hillmap_grid::{Bounds, LinearGrid};

/// A system and the grid to evaluate it over.
pub struct Profile {
    /// The two-body system.
    pub system: TwoBodySystem,
    /// The sample grid.
    pub grid: LinearGrid,
}

impl Profile {
    /// Evaluate the profile sequentially with the default clamp.
    pub fn evaluate(&self) -> Result<PotentialField, DomainError> {
        evaluate_potential(&self.system, &self.grid, SingularityPolicy::default())
    }
}

fn whole_system(cols: usize, rows: usize) -> Result<Profile, DomainError> {
    Ok(Profile {
        system: TwoBodySystem::earth_sun(),
        grid: LinearGrid::new(Bounds::new(-1.5, 1.7, -0.9, 0.9)?, cols, rows)?,
    })
}

/// Whole-system window at 256×144.
pub fn reference_profile() -> Result<Profile, DomainError> {
    whole_system(256, 144)
}

/// Whole-system window at 1280×720.
pub fn stress_profile() -> Result<Profile, DomainError> {
    whole_system(1280, 720)
}

/// ±0.016 around Earth at 354×200.
pub fn zoom_profile() -> Result<Profile, DomainError> {
    let system = TwoBodySystem::earth_sun();
    let bounds = Bounds::centered(system.secondary(), 0.016, 0.016)?;
    Ok(Profile {
        system,
        grid: LinearGrid::new(bounds, 354, 200)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillmap_grid::SampleGrid;

    #[test]
    fn profiles_have_expected_sizes() {
        assert_eq!(reference_profile().unwrap().grid.cell_count(), 256 * 144);
        assert_eq!(stress_profile().unwrap().grid.cell_count(), 1280 * 720);
        assert_eq!(zoom_profile().unwrap().grid.cell_count(), 354 * 200);
    }

    #[test]
    fn reference_profile_evaluates() {
        let field = reference_profile().unwrap().evaluate().unwrap();
        assert_eq!(field.shape(), (144, 256));
    }
}
