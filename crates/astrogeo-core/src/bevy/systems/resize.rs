//! Applies the drawing-surface size requested by the host page.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bevy::ViewportState;

/// Resizes the primary window when the viewport size changes.
///
/// The canvas is not fitted to its parent automatically; the host page
/// debounces container/window/fullscreen changes and sends one resize.
#[allow(clippy::cast_precision_loss)]
pub fn apply_viewport_size(
    viewport: Res<ViewportState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !viewport.is_changed() {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let (width, height) = (viewport.size.width as f32, viewport.size.height as f32);
    if window.resolution.width() != width || window.resolution.height() != height {
        tracing::info!("[viewer] window resized to {}x{}", width, height);
        window.resolution.set(width, height);
    }
}
