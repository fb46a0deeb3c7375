//! Orbital camera controller.
//!
//! The camera is described by spherical coordinates around a look-at
//! target. Every operation mutates [`CameraState`] and immediately
//! recomputes the derived eye position, so readers never observe the two
//! out of sync.

use std::f32::consts::FRAC_PI_2;

use bevy::math::Vec3;
use bevy::transform::components::Transform;
use serde::{Deserialize, Serialize};

/// Radians of rotation per pixel of drag.
pub const ROTATION_SPEED: f32 = 0.01;

/// Per-call interpolation factor of the target during a smooth focus.
pub const FOCUS_TARGET_LERP: f32 = 0.25;

/// Per-call interpolation factor of the distance during a smooth focus.
pub const FOCUS_DISTANCE_LERP: f32 = 0.2;

/// Vertical field of view shared by the projection and picking.
pub const FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_4;

/// Spherical camera description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub distance: f32,
    /// Elevation; clamped to `[-π/2, π/2]`.
    pub rotation_x: f32,
    /// Azimuth around the vertical axis.
    pub rotation_y: f32,
    pub target: Vec3,
}

/// Distance bounds and presets of one visualization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPreset {
    pub min_distance: f32,
    pub max_distance: f32,
    pub default_distance: f32,
    pub general_view_distance: f32,
}

impl CameraPreset {
    pub const SOLIDS: Self = Self {
        min_distance: 3.0,
        max_distance: 15.0,
        default_distance: 6.0,
        general_view_distance: 12.0,
    };

    pub const SOLAR: Self = Self {
        min_distance: 5.0,
        max_distance: 150.0,
        default_distance: 60.0,
        general_view_distance: 110.0,
    };

    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

pub fn clamp_rotation_x(rotation_x: f32) -> f32 {
    rotation_x.clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Spherical to Cartesian: azimuth = `rotation_y`, polar = `π/2 − rotation_x`.
pub fn eye_position(state: &CameraState) -> Vec3 {
    let phi = FRAC_PI_2 - state.rotation_x;
    let theta = state.rotation_y;
    state.target
        + Vec3::new(
            state.distance * phi.sin() * theta.sin(),
            state.distance * phi.cos(),
            state.distance * phi.sin() * theta.cos(),
        )
}

#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    preset: CameraPreset,
    position: Vec3,
}

impl CameraController {
    pub fn new(preset: CameraPreset) -> Self {
        let mut controller = Self {
            state: Self::default_state(&preset),
            preset,
            position: Vec3::ZERO,
        };
        controller.apply();
        controller
    }

    fn default_state(preset: &CameraPreset) -> CameraState {
        CameraState {
            distance: preset.default_distance,
            rotation_x: 0.0,
            rotation_y: 0.0,
            target: Vec3::ZERO,
        }
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn preset(&self) -> CameraPreset {
        self.preset
    }

    /// Derived eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Switches presets and resets to the new default view.
    pub fn set_preset(&mut self, preset: CameraPreset) {
        self.preset = preset;
        self.reset();
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.state.rotation_y += delta_x * ROTATION_SPEED;
        self.state.rotation_x = clamp_rotation_x(self.state.rotation_x + delta_y * ROTATION_SPEED);
        self.apply();
    }

    pub fn zoom(&mut self, delta: f32) {
        self.state.distance = self.preset.clamp_distance(self.state.distance + delta);
        self.apply();
    }

    /// Moves the target to `position` and the distance to `target_distance`.
    ///
    /// A smooth focus covers a fixed fraction of the remaining way per call
    /// and is meant to be repeated every frame of a follow.
    pub fn focus(&mut self, position: Vec3, target_distance: f32, smooth: bool) {
        let target_distance = self.preset.clamp_distance(target_distance);
        if smooth {
            self.state.target = self.state.target.lerp(position, FOCUS_TARGET_LERP);
            self.state.distance += (target_distance - self.state.distance) * FOCUS_DISTANCE_LERP;
        } else {
            self.state.target = position;
            self.state.distance = target_distance;
        }
        self.state.distance = self.preset.clamp_distance(self.state.distance);
        self.apply();
    }

    pub fn reset(&mut self) {
        self.state = Self::default_state(&self.preset);
        self.apply();
    }

    pub fn general_view(&mut self) {
        self.state = CameraState {
            distance: self.preset.general_view_distance,
            ..Self::default_state(&self.preset)
        };
        self.apply();
    }

    /// Recomputes the derived eye position. Idempotent.
    pub fn apply(&mut self) {
        self.position = eye_position(&self.state);
    }

    /// Transform placing a camera at the eye, looking at the target.
    pub fn transform(&self) -> Transform {
        let up = if self.state.rotation_x.abs() >= FRAC_PI_2 - 1e-4 {
            // Looking straight down or up: the world Y axis is degenerate.
            Vec3::new(self.state.rotation_y.sin(), 0.0, self.state.rotation_y.cos())
                * -self.state.rotation_x.signum()
        } else {
            Vec3::Y
        };
        Transform::from_translation(self.position).looking_at(self.state.target, up)
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraPreset::SOLIDS)
    }
}
