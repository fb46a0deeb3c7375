//! Reactions to the UI's view configuration.
//!
//! Reset, general view and follow requests arrive as monotonically changing
//! tick counters; each change fires once.

use bevy::prelude::*;

use crate::animation::{FOLLOW_FRAMES, SUN_FOCUS_DISTANCE, focus_distance};
use crate::bevy::plugin::ViewerMode;
use crate::bevy::{
    BodyKind, CelestialBody, FollowState, MainCamera, OrbitCamera, ViewTicks, ViewerConfig,
};

/// Camera distance used when focusing `body`.
pub fn body_focus_distance(body: &CelestialBody) -> f32 {
    match body.kind {
        BodyKind::Sun => SUN_FOCUS_DISTANCE,
        BodyKind::Planet => focus_distance(body.orbit_distance),
    }
}

/// Fires the tick triggers and starts or stops following the selection.
///
/// In the solar view a new selection (or a follow tick) starts a follow of
/// the selected body; clearing the selection stops it.
pub fn apply_view_ticks(
    config: Res<ViewerConfig>,
    mode: Res<State<ViewerMode>>,
    mut ticks: ResMut<ViewTicks>,
    mut follow: ResMut<FollowState>,
    mut cameras: Query<&mut OrbitCamera, With<MainCamera>>,
    bodies: Query<&CelestialBody>,
) {
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    if ticks.reset.fire(config.reset_tick) {
        tracing::info!("[viewer] camera reset");
        follow.cancel();
        camera.controller.reset();
    }
    if ticks.general_view.fire(config.general_view_tick) {
        tracing::info!("[viewer] general view");
        follow.cancel();
        camera.controller.general_view();
    }

    let follow_requested = ticks.follow.fire(config.follow_tick);
    let selection_changed = ticks.selected != config.selected;
    if selection_changed {
        ticks.selected.clone_from(&config.selected);
    }

    if *mode.get() != ViewerMode::Solar || !(follow_requested || selection_changed) {
        return;
    }

    let selected = config
        .selected
        .as_deref()
        .and_then(|id| bodies.iter().find(|body| body.id == id));
    match selected {
        Some(body) => {
            let distance = body_focus_distance(body);
            tracing::info!("[viewer] following {} at distance {}", body.id, distance);
            follow.start(&body.id, distance, FOLLOW_FRAMES);
        }
        None if selection_changed => follow.cancel(),
        None => {}
    }
}
