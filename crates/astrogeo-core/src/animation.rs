//! Per-frame animation math.
//!
//! Steps are per frame, not per second: animation speed follows the display
//! refresh rate. These values are tuned by eye and carry no physical meaning.

use std::f32::consts::TAU;

/// Revolution coefficient applied to `orbital_speed`.
pub const ORBIT_SPEED_SCALE: f32 = 0.01;

/// Spin coefficient applied to `spin_speed`.
pub const SPIN_SPEED_SCALE: f32 = 1.0;

/// Spin of a geometric solid, radians per frame at speed multiplier 1.
pub const SOLID_SPIN_SPEED: f32 = 0.01;

pub const MIN_SPEED_MULTIPLIER: f32 = 0.0;
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;

/// Frames a follow keeps re-focusing the camera on its entity.
pub const FOLLOW_FRAMES: u32 = 60;

/// Camera distance when focusing a planet.
pub const BASE_FOCUS_DISTANCE: f32 = 20.0;

/// Camera distance when focusing the sun.
pub const SUN_FOCUS_DISTANCE: f32 = 35.0;

/// `(orbit distance threshold, discount)` pairs, largest threshold first.
pub const FOCUS_DISCOUNTS: [(f32, f32); 2] = [(58.0, 12.0), (40.0, 6.0)];

/// Advances an angle, wrapping into `[0, 2π)`.
pub fn advance_angle(angle: f32, step: f32) -> f32 {
    (angle + step).rem_euclid(TAU)
}

pub fn revolution_step(orbital_speed: f32, speed: f32) -> f32 {
    orbital_speed * speed * ORBIT_SPEED_SCALE
}

pub fn spin_step(spin_speed: f32, speed: f32) -> f32 {
    spin_speed * speed * SPIN_SPEED_SCALE
}

/// Camera distance used to follow a planet orbiting at `orbit_distance`.
///
/// Outer planets get a closer camera so they do not look lost in the frame.
pub fn focus_distance(orbit_distance: f32) -> f32 {
    let discount = FOCUS_DISCOUNTS
        .iter()
        .find(|(threshold, _)| orbit_distance >= *threshold)
        .map_or(0.0, |(_, discount)| *discount);
    BASE_FOCUS_DISTANCE - discount
}

/// Clamps a speed multiplier into the supported range; NaN becomes 1.
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        tracing::warn!("[animation] NaN speed multiplier, using 1");
        return 1.0;
    }
    let clamped = speed.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER);
    if (clamped - speed).abs() > f32::EPSILON {
        tracing::warn!("[animation] speed multiplier {} clamped to {}", speed, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_distance_discounts_outer_planets() {
        assert_eq!(focus_distance(18.0), BASE_FOCUS_DISTANCE);
        assert_eq!(focus_distance(39.9), BASE_FOCUS_DISTANCE);
        assert_eq!(focus_distance(42.0), BASE_FOCUS_DISTANCE - 6.0);
        assert_eq!(focus_distance(52.0), BASE_FOCUS_DISTANCE - 6.0);
        assert_eq!(focus_distance(58.0), BASE_FOCUS_DISTANCE - 12.0);
        assert_eq!(focus_distance(60.0), BASE_FOCUS_DISTANCE - 12.0);
    }

    #[test]
    fn steps_scale_with_speed() {
        assert!((revolution_step(1.0, 2.0) - 0.02).abs() < 1e-7);
        assert!((spin_step(0.02, 3.0) - 0.06).abs() < 1e-7);
        assert_eq!(revolution_step(4.15, 0.0), 0.0);
        assert!(ORBIT_SPEED_SCALE < SPIN_SPEED_SCALE);
    }

    #[test]
    fn angles_wrap() {
        let a = advance_angle(TAU - 0.1, 0.3);
        assert!((a - 0.2).abs() < 1e-5);
        assert!((0.0..TAU).contains(&advance_angle(0.0, -0.5)));
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(clamp_speed(2.5), 2.5);
        assert_eq!(clamp_speed(9.0), MAX_SPEED_MULTIPLIER);
        assert_eq!(clamp_speed(-1.0), MIN_SPEED_MULTIPLIER);
        assert_eq!(clamp_speed(f32::NAN), 1.0);
    }
}
