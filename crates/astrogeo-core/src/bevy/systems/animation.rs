//! Per-frame animation: planet revolutions and spins.
//!
//! Angles advance by a fixed amount per frame scaled by the speed
//! multiplier, and nothing moves while paused.

use bevy::prelude::*;

use crate::animation::{advance_angle, revolution_step, spin_step};
use crate::bevy::{FrameContext, OrbitGroup, SolidRoot, Spin};

/// Advances every orbit group around the sun.
pub fn advance_orbits(
    frame: Res<FrameContext>,
    mut groups: Query<(&mut OrbitGroup, &mut Transform)>,
) {
    if frame.paused {
        return;
    }
    for (mut group, mut transform) in groups.iter_mut() {
        let step = revolution_step(group.orbital_speed, frame.speed);
        group.angle = advance_angle(group.angle, step);
        transform.rotation = Quat::from_rotation_y(group.angle);
    }
}

/// Spins bodies and the solid around their own axes.
///
/// The solid holds still while decomposed so its fragments stay readable.
pub fn advance_spins(
    frame: Res<FrameContext>,
    mut spinners: Query<(&mut Spin, &mut Transform, Has<SolidRoot>)>,
) {
    if frame.paused {
        return;
    }
    for (mut spin, mut transform, is_solid) in spinners.iter_mut() {
        if is_solid && frame.decomposed {
            continue;
        }
        let step = spin_step(spin.speed, frame.speed);
        spin.angle = advance_angle(spin.angle, step);
        transform.rotation = spin.rotation();
    }
}
