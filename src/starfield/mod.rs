//! Procedural background star field
//!
//! Fills the sky behind the catalog stars with a dusting of anonymous
//! points. Generation takes an explicit seed so a given `(count, seed)`
//! pair is bit-for-bit reproducible across runs.

use crate::constants::{BACKGROUND_DISTANCE_SPREAD, BACKGROUND_MIN_DISTANCE};
use crate::scene::CelestialBody;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

/// Spectral classes sampled for background-star descriptions
const SPECTRAL_CLASSES: [&str; 7] = ["O", "B", "A", "F", "G", "K", "M"];

/// Generate a reproducible background star field
///
/// Stars are distributed uniformly over directions (the polar angle comes
/// from `acos(2u - 1)`, which avoids bunching at the poles) at distances
/// in `[400, 600)` scene units, with sizes in `[0.5, 2.0)` and a random
/// spectral class. Ids are `star-{i}` and stable for a given seed.
pub fn generate_background_stars(count: usize, seed: u64) -> Vec<CelestialBody> {
    let mut rng = StdRng::seed_from_u64(seed);

    let unit = Uniform::from(0.0..1.0);
    let mut bodies = Vec::with_capacity(count);

    for i in 0..count {
        let r = BACKGROUND_MIN_DISTANCE + unit.sample(&mut rng) * BACKGROUND_DISTANCE_SPREAD;
        let theta = unit.sample(&mut rng) * 2.0 * PI;
        let phi = (2.0 * unit.sample(&mut rng) - 1.0).acos();

        let position = nalgebra::Vector3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        );

        let class_index = (unit.sample(&mut rng) * SPECTRAL_CLASSES.len() as f64) as usize;
        let spectral = SPECTRAL_CLASSES[class_index.min(SPECTRAL_CLASSES.len() - 1)];

        let designation = (unit.sample(&mut rng) * 100_000.0) as u64;
        let size = 0.5 + unit.sample(&mut rng) * 1.5;

        bodies.push(
            CelestialBody::new(
                format!("star-{}", i),
                format!("HIP {}", designation),
                position,
                size,
                "#ffffff",
            )
            .with_description(format!("Star type {}", spectral))
            .with_spectral_class(spectral),
        );
    }

    bodies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible_for_seed() {
        let first = generate_background_stars(200, 42);
        let second = generate_background_stars(200, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_background_stars(50, 1);
        let b = generate_background_stars(50, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_distance_and_size_bounds() {
        for star in generate_background_stars(500, 7) {
            let distance = star.position.norm();
            assert!(
                (BACKGROUND_MIN_DISTANCE
                    ..BACKGROUND_MIN_DISTANCE + BACKGROUND_DISTANCE_SPREAD)
                    .contains(&distance),
                "distance {} out of band",
                distance
            );
            assert!((0.5..2.0).contains(&star.size));
            assert!(star.spectral_class.is_some());
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let stars = generate_background_stars(3, 0);
        let ids: Vec<&str> = stars.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["star-0", "star-1", "star-2"]);
    }
}
