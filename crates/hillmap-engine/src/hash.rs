//! Hashing utilities for field and configuration comparison.
//!
//! FNV-1a over value bit patterns. Not cryptographic. Two runs with
//! identical inputs log identical hashes, and tests compare fields
//! through them.

use hillmap_field::{PotentialField, SingularityPolicy};

use crate::config::{SceneConfig, SceneKind};

/// Incremental 64-bit FNV-1a state.
#[derive(Clone, Copy, Debug)]
struct Fnv1a(u64);

impl Fnv1a {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Self(Self::OFFSET)
    }

    fn bytes(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self.0 = (self.0 ^ u64::from(b)).wrapping_mul(Self::PRIME);
        }
        self
    }

    fn word(self, v: u64) -> Self {
        self.bytes(&v.to_le_bytes())
    }

    fn finish(self) -> u64 {
        self.0
    }
}

/// Hash a field's shape, every value's bit pattern, and its exclusion mask.
pub fn field_hash(field: &PotentialField) -> u64 {
    let state = Fnv1a::new().word(field.rows() as u64).word(field.cols() as u64);
    let state = field.values().iter().fold(state, |h, v| h.word(v.to_bits()));
    field
        .excluded_mask()
        .iter()
        .fold(state, |h, &ex| h.bytes(&[u8::from(ex)]))
        .finish()
}

/// Hash the settings that determine a scene's pixels.
///
/// Output directory and worker count are left out: neither changes the
/// image.
pub fn config_hash(kind: SceneKind, config: &SceneConfig) -> u64 {
    let (tag, radius) = match config.policy {
        SingularityPolicy::Clamp { min_radius } => (0u8, min_radius),
        SingularityPolicy::Exclude { radius } => (1u8, radius),
    };
    Fnv1a::new()
        .bytes(kind.name().as_bytes())
        .word(config.scale.to_bits())
        .bytes(&[tag])
        .word(radius.to_bits())
        .word(config.solver.tolerance.to_bits())
        .word(u64::from(config.solver.max_iterations))
        .word(config.seed)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn field(values: Vec<f64>) -> PotentialField {
        PotentialField::from_values(2, 2, values, vec![false; 4]).unwrap()
    }

    #[test]
    fn fnv_of_nothing_is_offset_basis() {
        assert_eq!(Fnv1a::new().bytes(&[]).finish(), Fnv1a::OFFSET);
    }

    #[test]
    fn known_fnv_vector() {
        // FNV-1a 64 of "a".
        assert_eq!(Fnv1a::new().bytes(b"a").finish(), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn field_hash_sees_every_value() {
        let a = field(vec![1.0, 2.0, 3.0, 4.0]);
        let b = field(vec![1.0, 2.0, 3.0, 4.000_000_1]);
        assert_eq!(field_hash(&a), field_hash(&a.clone()));
        assert_ne!(field_hash(&a), field_hash(&b));
    }

    #[test]
    fn field_hash_sees_mask_and_shape() {
        let a = field(vec![0.0; 4]);
        let masked = PotentialField::from_values(2, 2, vec![0.0; 4], vec![true, false, false, false]).unwrap();
        assert_ne!(field_hash(&a), field_hash(&masked));
        let wide = PotentialField::from_values(2, 3, vec![0.0; 6], vec![false; 6]).unwrap();
        let tall = PotentialField::from_values(3, 2, vec![0.0; 6], vec![false; 6]).unwrap();
        assert_ne!(field_hash(&wide), field_hash(&tall));
    }

    #[test]
    fn config_hash_ignores_output_location() {
        let a = SceneConfig::default();
        let b = SceneConfig {
            output_dir: PathBuf::from("/elsewhere"),
            workers: Some(3),
            ..SceneConfig::default()
        };
        assert_eq!(
            config_hash(SceneKind::EarthSun, &a),
            config_hash(SceneKind::EarthSun, &b)
        );
        assert_ne!(
            config_hash(SceneKind::EarthSun, &a),
            config_hash(SceneKind::HillZoom, &a)
        );
        let seeded = SceneConfig {
            seed: 7,
            ..SceneConfig::default()
        };
        assert_ne!(
            config_hash(SceneKind::Archipelago, &a),
            config_hash(SceneKind::Archipelago, &seeded)
        );
    }
}
