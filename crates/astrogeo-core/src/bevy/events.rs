//! ECS messages for the viewer.
//!
//! Raw pointer input enters as `PointerSample`; the interaction resolver
//! turns it into the high-level messages below.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSampleKind {
    Down,
    Move,
    Up,
    /// Click/tap delivered after release, even without movement.
    Click,
    Leave,
    /// Browser-convention wheel delta in pixels (positive scrolls down).
    Wheel { delta_y: f32 },
    /// Distance between two touches in pixels.
    Pinch { spread: f32 },
    PinchEnd,
}

/// One raw pointer/touch observation, in drawing-surface pixels.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerSampleKind,
    pub position: Vec2,
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(kind: PointerSampleKind, position: Vec2, time_ms: f64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }
}

/// A selectable entity was clicked or tapped.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct EntityClicked {
    pub id: String,
    pub is_double: bool,
}

#[derive(Message, Debug, Clone, Default)]
pub struct DragStarted;

#[derive(Message, Debug, Clone, Default)]
pub struct DragEnded;

/// The entity under the pointer changed.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct HoverChanged {
    pub id: Option<String>,
}

/// Camera manipulation requested by the pointer.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum CameraInput {
    Rotate { dx: f32, dy: f32 },
    Zoom { delta: f32 },
}
