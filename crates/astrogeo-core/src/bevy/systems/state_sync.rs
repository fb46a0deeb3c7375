//! State synchronization systems.
//!
//! Syncs Bevy ECS state to the shared stores for Yew UI access.

use bevy::prelude::*;

use crate::bevy::plugin::ViewerMode;
use crate::bevy::{
    CameraSummary, DragEnded, DragStarted, EntityClicked, FollowState, HoverChanged, MainCamera,
    OrbitCamera, PointerInteraction, StateStores, ViewMode, ViewSummary, ViewerConfig,
    ViewerEvent,
};

/// Forwards this frame's interaction messages to the event store.
pub fn sync_viewer_events(
    state_stores: Res<StateStores>,
    mut drag_started: MessageReader<DragStarted>,
    mut drag_ended: MessageReader<DragEnded>,
    mut clicked: MessageReader<EntityClicked>,
    mut hover: MessageReader<HoverChanged>,
) {
    for _ in drag_started.read() {
        state_stores.events.push(ViewerEvent::DragStart);
    }
    for _ in drag_ended.read() {
        state_stores.events.push(ViewerEvent::DragEnd);
    }
    for event in clicked.read() {
        state_stores.events.push(ViewerEvent::EntityClicked {
            id: event.id.clone(),
            is_double: event.is_double,
        });
    }
    for event in hover.read() {
        state_stores.events.push(ViewerEvent::Hover {
            id: event.id.clone(),
        });
    }
}

/// Publishes the view summary. The store only versions real changes.
pub fn sync_view_summary(
    state_stores: Res<StateStores>,
    mode: Res<State<ViewerMode>>,
    config: Res<ViewerConfig>,
    follow: Res<FollowState>,
    interaction: Res<PointerInteraction>,
    cameras: Query<&OrbitCamera, With<MainCamera>>,
) {
    let camera = cameras
        .single()
        .map(|camera| {
            let state = camera.controller.state();
            CameraSummary {
                distance: state.distance,
                rotation_x: state.rotation_x,
                rotation_y: state.rotation_y,
                target: state.target.to_array(),
            }
        })
        .unwrap_or_default();

    state_stores.view.update(ViewSummary {
        mode: match mode.get() {
            ViewerMode::Idle => ViewMode::Idle,
            ViewerMode::Solids => ViewMode::Solids,
            ViewerMode::Solar => ViewMode::Solar,
        },
        selected: config.selected.clone(),
        hovered: interaction.resolver.hovered().map(str::to_string),
        paused: config.paused,
        speed: config.speed,
        decomposed: config.decomposed,
        following: follow.is_active(),
        camera,
    });
}
