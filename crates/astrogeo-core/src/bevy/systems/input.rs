//! Window input collection.
//!
//! Converts mouse, wheel and touch input into `PointerSample` messages in
//! drawing-surface pixels, timestamped with real time.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

use crate::bevy::{PointerSample, PointerSampleKind};

/// Pixels per wheel "line", matching the browser convention.
const PIXELS_PER_LINE: f32 = 100.0;

/// Touch state carried across frames.
#[derive(Default)]
pub struct TouchTracker {
    pinching: bool,
    last_single: Option<Vec2>,
}

/// System to translate window input into pointer samples.
#[allow(clippy::too_many_arguments)]
pub fn collect_pointer_samples(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    time: Res<Time<Real>>,
    mut cursor_moved: MessageReader<CursorMoved>,
    mut cursor_left: MessageReader<CursorLeft>,
    mut wheel: MessageReader<MouseWheel>,
    mut tracker: Local<TouchTracker>,
    mut samples: MessageWriter<PointerSample>,
) {
    let now = time.elapsed_secs_f64() * 1000.0;
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let mut emit = |kind: PointerSampleKind, position: Vec2| {
        samples.write(PointerSample::new(kind, position, now));
    };

    // Mouse
    if let Some(position) = cursor {
        if mouse_button.just_pressed(MouseButton::Left) {
            emit(PointerSampleKind::Down, position);
        }
    }
    for moved in cursor_moved.read() {
        emit(PointerSampleKind::Move, moved.position);
    }
    if mouse_button.just_released(MouseButton::Left) {
        let position = cursor.unwrap_or_default();
        emit(PointerSampleKind::Up, position);
        if cursor.is_some() {
            emit(PointerSampleKind::Click, position);
        }
    }
    if cursor_left.read().count() > 0 {
        emit(PointerSampleKind::Leave, Vec2::ZERO);
    }
    for scroll in wheel.read() {
        let scale = match scroll.unit {
            MouseScrollUnit::Line => PIXELS_PER_LINE,
            MouseScrollUnit::Pixel => 1.0,
        };
        // Winit reports scrolling up as positive; browsers as negative.
        emit(
            PointerSampleKind::Wheel {
                delta_y: -scroll.y * scale,
            },
            cursor.unwrap_or_default(),
        );
    }

    // Touch
    let active: Vec<Vec2> = touches.iter().map(|touch| touch.position()).collect();
    match active.as_slice() {
        [a, b] => {
            if !tracker.pinching {
                tracker.pinching = true;
                if let Some(last) = tracker.last_single.take() {
                    emit(PointerSampleKind::Up, last);
                }
            }
            emit(
                PointerSampleKind::Pinch {
                    spread: a.distance(*b),
                },
                (*a + *b) / 2.0,
            );
        }
        [single] => {
            if tracker.pinching {
                // Lifting one finger of a pinch does not start a drag.
                tracker.pinching = false;
                emit(PointerSampleKind::PinchEnd, *single);
            } else if touches.any_just_pressed() {
                emit(PointerSampleKind::Down, *single);
                tracker.last_single = Some(*single);
            } else if tracker.last_single.is_some_and(|last| last != *single) {
                emit(PointerSampleKind::Move, *single);
                tracker.last_single = Some(*single);
            }
        }
        [] => {
            if tracker.pinching {
                tracker.pinching = false;
                emit(PointerSampleKind::PinchEnd, Vec2::ZERO);
            }
            if let Some(last) = tracker.last_single.take() {
                let position = touches
                    .iter_just_released()
                    .next()
                    .map_or(last, |touch| touch.position());
                emit(PointerSampleKind::Up, position);
                emit(PointerSampleKind::Click, position);
            }
        }
        _ => {}
    }
}
