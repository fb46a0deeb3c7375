//! Per-frame context derived from the live configuration.

use bevy::prelude::*;

use crate::bevy::{FrameContext, ViewerConfig};

/// Rebuilds the frame context once per frame, after commands ran.
pub fn refresh_frame_context(config: Res<ViewerConfig>, mut frame: ResMut<FrameContext>) {
    frame.frame += 1;
    frame.paused = config.paused;
    frame.speed = config.speed;
    frame.decomposed = config.decomposed;
    frame.layers = config.layers;
    frame.show_orbits = config.show_orbits;
}
