//! ECS resources for the viewer.
//!
//! Holds the command queue shared with the host page, the runtime view
//! configuration and the per-frame context derived from it.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::animation::clamp_speed;
use crate::config::{LayerFlags, SolarSystemConfig, SolidsConfig};
use crate::error::CommandError;
use crate::interaction::InteractionResolver;
use crate::resize::ViewportSize;
use crate::ticks::EdgeTrigger;

/// Distinguishes "field absent" (`None`) from "field is null" (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Runtime view configuration supplied by the UI.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub selected: Option<String>,
    pub paused: bool,
    /// Speed multiplier in `[0, 5]`.
    pub speed: f32,
    pub layers: LayerFlags,
    pub decomposed: bool,
    pub show_orbits: bool,
    pub reset_tick: u32,
    pub general_view_tick: u32,
    pub follow_tick: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            selected: None,
            paused: false,
            speed: 1.0,
            layers: LayerFlags::default(),
            decomposed: false,
            show_orbits: true,
            reset_tick: 0,
            general_view_tick: 0,
            follow_tick: 0,
        }
    }
}

/// Partial update of [`ViewerConfig`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfigPatch {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_faces: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_edges: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_vertices: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decomposed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_orbits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_tick: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_view_tick: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_tick: Option<u32>,
}

impl ViewerConfig {
    pub fn apply(&mut self, patch: ViewerConfigPatch) {
        if let Some(selected) = patch.selected {
            self.selected = selected;
        }
        if let Some(paused) = patch.paused {
            self.paused = paused;
        }
        if let Some(speed) = patch.speed {
            self.speed = clamp_speed(speed);
        }
        if let Some(faces) = patch.show_faces {
            self.layers.faces = faces;
        }
        if let Some(edges) = patch.show_edges {
            self.layers.edges = edges;
        }
        if let Some(vertices) = patch.show_vertices {
            self.layers.vertices = vertices;
        }
        if let Some(decomposed) = patch.decomposed {
            self.decomposed = decomposed;
        }
        if let Some(show_orbits) = patch.show_orbits {
            self.show_orbits = show_orbits;
        }
        if let Some(tick) = patch.reset_tick {
            self.reset_tick = tick;
        }
        if let Some(tick) = patch.general_view_tick {
            self.general_view_tick = tick;
        }
        if let Some(tick) = patch.follow_tick {
            self.follow_tick = tick;
        }
    }
}

/// Snapshot of the configuration for the current frame.
///
/// Rebuilt once at the start of every frame; per-frame systems read this
/// instead of the live configuration.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FrameContext {
    pub frame: u64,
    pub paused: bool,
    pub speed: f32,
    pub decomposed: bool,
    pub layers: LayerFlags,
    pub show_orbits: bool,
}

/// Multi-frame camera follow of one entity.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FollowState {
    pub target: Option<String>,
    pub remaining: u32,
    pub distance: f32,
}

impl FollowState {
    pub fn start(&mut self, target: &str, distance: f32, frames: u32) {
        self.target = Some(target.to_string());
        self.remaining = frames;
        self.distance = distance;
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some() && self.remaining > 0
    }
}

/// Edge triggers of the UI tick counters, plus the last seen selection.
#[derive(Resource, Debug, Clone, Default)]
pub struct ViewTicks {
    pub reset: EdgeTrigger,
    pub general_view: EdgeTrigger,
    pub follow: EdgeTrigger,
    pub selected: Option<String>,
}

impl ViewTicks {
    /// Primes every trigger with the current values so nothing replays.
    pub fn primed(config: &ViewerConfig) -> Self {
        Self {
            reset: EdgeTrigger::primed(config.reset_tick),
            general_view: EdgeTrigger::primed(config.general_view_tick),
            follow: EdgeTrigger::primed(config.follow_tick),
            selected: config.selected.clone(),
        }
    }
}

/// Owner of the interaction session.
#[derive(Resource, Debug, Default)]
pub struct PointerInteraction {
    pub resolver: InteractionResolver,
}

/// Current drawing surface size.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub size: ViewportSize,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            size: ViewportSize {
                width: 1280,
                height: 720,
            },
        }
    }
}

/// Configurations the next scene is built from.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneSources {
    pub solids: SolidsConfig,
    pub solar: SolarSystemConfig,
}

// ============================================================================
// Commands
// ============================================================================

/// Commands sent from the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerCommand {
    /// Leave the current mode, tearing its scene down.
    ClearMode,
    InitSolids {
        #[serde(default)]
        config: SolidsConfig,
    },
    InitSolar {
        #[serde(default)]
        config: SolarSystemConfig,
    },
    /// Frame boundary: commands after it run on the next frame.
    Yield,
    SetConfig {
        patch: ViewerConfigPatch,
    },
    Resize {
        width: u32,
        height: u32,
    },
}

impl ViewerCommand {
    /// Parses a JSON command and validates any configuration it carries.
    pub fn from_json(json: &str) -> Result<Self, CommandError> {
        let command: Self = serde_json::from_str(json)?;
        match &command {
            Self::InitSolids { config } => config.validate()?,
            Self::InitSolar { config } => config.validate()?,
            _ => {}
        }
        Ok(command)
    }
}

/// Command queue shared between the host page and the ECS.
#[derive(Resource, Clone)]
pub struct CommandQueue {
    inner: Arc<Mutex<VecDeque<ViewerCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn push(&self, command: ViewerCommand) {
        self.inner.lock().push_back(command);
    }

    /// Drains commands until a Yield or the end of the queue.
    ///
    /// The Yield is consumed but not returned; everything after it stays
    /// queued for the next frame.
    pub fn drain_until_yield(&self) -> Vec<ViewerCommand> {
        let mut guard = self.inner.lock();
        let mut commands = Vec::new();
        while let Some(command) = guard.pop_front() {
            if matches!(command, ViewerCommand::Yield) {
                break;
            }
            commands.push(command);
        }
        commands
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_stops_at_yield() {
        let queue = CommandQueue::new();
        queue.push(ViewerCommand::ClearMode);
        queue.push(ViewerCommand::Yield);
        queue.push(ViewerCommand::InitSolids {
            config: SolidsConfig::default(),
        });

        assert_eq!(queue.drain_until_yield(), vec![ViewerCommand::ClearMode]);
        assert_eq!(queue.len(), 1);
        assert!(matches!(
            queue.drain_until_yield().as_slice(),
            [ViewerCommand::InitSolids { .. }]
        ));
        assert!(queue.is_empty());
    }

    #[test]
    fn commands_parse_from_json() {
        let command =
            ViewerCommand::from_json(r#"{"type":"resize","width":640,"height":480}"#).unwrap();
        assert_eq!(
            command,
            ViewerCommand::Resize {
                width: 640,
                height: 480,
            }
        );

        let command = ViewerCommand::from_json(r#"{"type":"init_solar"}"#).unwrap();
        assert!(matches!(
            command,
            ViewerCommand::InitSolar { config } if config.planets().count() == 8
        ));

        assert!(matches!(
            ViewerCommand::from_json(r#"{"type":"init_solids","config":{"size":-1}}"#),
            Err(CommandError::Config(_))
        ));
        assert!(matches!(
            ViewerCommand::from_json(r#"{"type":"fly"}"#),
            Err(CommandError::Json(_))
        ));
    }

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let mut config = ViewerConfig {
            selected: Some("tierra".into()),
            ..ViewerConfig::default()
        };

        let patch: ViewerConfigPatch = serde_json::from_str(r#"{"paused":true}"#).unwrap();
        config.apply(patch);
        assert_eq!(config.selected.as_deref(), Some("tierra"));
        assert!(config.paused);

        let patch: ViewerConfigPatch = serde_json::from_str(r#"{"selected":null}"#).unwrap();
        config.apply(patch);
        assert_eq!(config.selected, None);

        let patch: ViewerConfigPatch =
            serde_json::from_str(r#"{"selected":"marte","show_edges":true}"#).unwrap();
        config.apply(patch);
        assert_eq!(config.selected.as_deref(), Some("marte"));
        assert!(config.layers.edges);
    }

    #[test]
    fn patch_clamps_speed() {
        let mut config = ViewerConfig::default();
        config.apply(ViewerConfigPatch {
            speed: Some(12.0),
            ..Default::default()
        });
        assert_eq!(config.speed, 5.0);
    }

    #[test]
    fn follow_state_lifecycle() {
        let mut follow = FollowState::default();
        assert!(!follow.is_active());
        follow.start("neptuno", 8.0, 60);
        assert!(follow.is_active());
        follow.cancel();
        assert_eq!(follow, FollowState::default());
    }
}
