//! Follow camera system.

use bevy::prelude::*;

use crate::bevy::systems::hierarchy::{TransformTree, world_transform};
use crate::bevy::{CelestialBody, FollowState, MainCamera, OrbitCamera};

/// Smoothly focuses the camera on the followed body for the remaining frames.
///
/// The body keeps moving along its orbit, so its world position is
/// recomputed every frame.
pub fn follow_selected_body(
    mut follow: ResMut<FollowState>,
    mut cameras: Query<&mut OrbitCamera, With<MainCamera>>,
    bodies: Query<(Entity, &CelestialBody)>,
    tree: TransformTree,
) {
    if !follow.is_active() {
        return;
    }
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let target = follow.target.as_deref().unwrap_or_default();
    let Some((entity, _)) = bodies.iter().find(|(_, body)| body.id == target) else {
        tracing::warn!("[viewer] follow target {} vanished", target);
        follow.cancel();
        return;
    };

    let position = world_transform(entity, &tree).translation;
    camera.controller.focus(position, follow.distance, true);
    follow.remaining = follow.remaining.saturating_sub(1);
}
