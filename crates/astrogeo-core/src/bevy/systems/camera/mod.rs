//! Camera systems for the viewer.
//!
//! - `view`: UI tick counters (reset, general view, follow) and selection
//! - `follow`: Multi-frame focus on a selected body
//!
//! Pointer input and the final transform are applied here.

pub mod follow;
pub mod view;

pub use follow::*;
pub use view::*;

use bevy::prelude::*;

use crate::bevy::{CameraInput, MainCamera, OrbitCamera};

/// Applies rotate/zoom requests from the pointer to the orbital controller.
pub fn apply_camera_input(
    mut inputs: MessageReader<CameraInput>,
    mut cameras: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    let Ok(mut camera) = cameras.single_mut() else {
        inputs.clear();
        return;
    };
    for input in inputs.read() {
        match *input {
            CameraInput::Rotate { dx, dy } => camera.controller.rotate(dx, dy),
            CameraInput::Zoom { delta } => camera.controller.zoom(delta),
        }
    }
}

/// Writes the controller's placement into the camera transform.
///
/// Runs after every system that may move the controller this frame.
pub fn apply_camera_transform(
    mut cameras: Query<(&OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (camera, mut transform) in cameras.iter_mut() {
        transform.set_if_neq(camera.controller.transform());
    }
}
