//! Command processing system.
//!
//! Processes commands pushed by the host page through the shared queue.

use bevy::prelude::*;

use crate::bevy::plugin::ViewerMode;
use crate::bevy::{CommandQueue, SceneSources, ViewerCommand, ViewerConfig, ViewportState};
use crate::resize::viewport_size;

/// System to process queued commands until a Yield is encountered.
///
/// Commands after Yield are processed in the next frame, which lets
/// `ClearMode` finish its state transition before the next mode starts.
pub fn process_commands(
    command_queue: Res<CommandQueue>,
    mut next_mode: ResMut<NextState<ViewerMode>>,
    mut sources: ResMut<SceneSources>,
    mut config: ResMut<ViewerConfig>,
    mut viewport: ResMut<ViewportState>,
) {
    for command in command_queue.drain_until_yield() {
        match command {
            ViewerCommand::ClearMode => {
                tracing::info!("[command] ClearMode");
                next_mode.set(ViewerMode::Idle);
            }
            ViewerCommand::InitSolids { config: solids } => {
                tracing::info!("[command] InitSolids: {}", solids.kind().id());
                *config = ViewerConfig {
                    layers: solids.layers,
                    ..ViewerConfig::default()
                };
                sources.solids = solids;
                next_mode.set(ViewerMode::Solids);
            }
            ViewerCommand::InitSolar { config: solar } => {
                tracing::info!("[command] InitSolar with {} planets", solar.planets().count());
                *config = ViewerConfig::default();
                sources.solar = solar;
                next_mode.set(ViewerMode::Solar);
            }
            ViewerCommand::SetConfig { patch } => {
                tracing::debug!("[command] SetConfig: {:?}", patch);
                config.apply(patch);
            }
            ViewerCommand::Resize { width, height } => {
                let requested = (f64::from(width), f64::from(height));
                match viewport_size(requested, requested) {
                    Some(size) => {
                        tracing::info!("[command] Resize: {}x{}", size.width, size.height);
                        viewport.size = size;
                    }
                    None => tracing::warn!("[command] Resize ignored: {}x{}", width, height),
                }
            }
            // Consumed by drain_until_yield(), never reaches here
            ViewerCommand::Yield => {}
        }
    }
}
