//! Sizes and helper shapes for the solar view and the solids backdrop.

use bevy::math::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{PlanetConfig, SunConfig};

/// Seed for the solar view backdrop; fixed so the sky is stable across visits.
pub const STAR_FIELD_SEED: u64 = 0x5741_5253;
pub const STAR_COUNT: usize = 600;
pub const STAR_FIELD_RADIUS: f32 = 220.0;

/// Derived render sizes of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyVisual {
    pub radius: f32,
    /// Radius of the orbit ring; zero for the sun.
    pub orbit_radius: f32,
    /// Axial tilt in radians.
    pub tilt: f32,
    pub ring: Option<(f32, f32)>,
}

impl BodyVisual {
    pub fn planet(config: &PlanetConfig) -> Self {
        Self {
            radius: config.size,
            orbit_radius: config.distance,
            tilt: config.tilt.to_radians(),
            ring: config
                .ring
                .as_ref()
                .map(|ring| (ring.inner_radius, ring.outer_radius)),
        }
    }

    pub fn sun(config: &SunConfig) -> Self {
        Self {
            radius: config.size,
            orbit_radius: 0.0,
            tilt: 0.0,
            ring: None,
        }
    }
}

/// Points on a spherical shell between `radius` and `1.5 * radius`.
pub fn star_field(count: usize, radius: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let z: f32 = rng.random_range(-1.0..1.0);
            let theta: f32 = rng.random_range(0.0..std::f32::consts::TAU);
            let r = (1.0 - z * z).sqrt();
            let distance = radius * rng.random_range(1.0..1.5);
            Vec3::new(r * theta.cos(), z, r * theta.sin()) * distance
        })
        .collect()
}

/// Line segments of a square reference grid on the XZ plane at height `y`.
pub fn grid_lines(half_extent: f32, divisions: u16, y: f32) -> Vec<[Vec3; 2]> {
    let step = 2.0 * half_extent / f32::from(divisions.max(1));
    (0..=divisions.max(1))
        .flat_map(|i| {
            let offset = -half_extent + step * f32::from(i);
            [
                [Vec3::new(offset, y, -half_extent), Vec3::new(offset, y, half_extent)],
                [Vec3::new(-half_extent, y, offset), Vec3::new(half_extent, y, offset)],
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolarSystemConfig;

    #[test]
    fn star_field_is_deterministic_and_outside_the_system() {
        let a = star_field(50, 100.0, 7);
        let b = star_field(50, 100.0, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.length() >= 99.9 && p.length() <= 150.1));
        assert_ne!(star_field(50, 100.0, 8), a);
    }

    #[test]
    fn saturn_carries_its_ring() {
        let config = SolarSystemConfig::default();
        let saturno = BodyVisual::planet(config.planet("saturno").unwrap());
        let (inner, outer) = saturno.ring.unwrap();
        assert!(inner > saturno.radius && outer > inner);
        assert!((saturno.orbit_radius - 42.0).abs() < f32::EPSILON);
        assert!(BodyVisual::planet(config.planet("tierra").unwrap()).ring.is_none());
    }

    #[test]
    fn grid_has_two_lines_per_division() {
        assert_eq!(grid_lines(5.0, 10, 0.0).len(), 22);
    }
}
