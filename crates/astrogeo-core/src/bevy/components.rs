//! ECS components for the viewer scenes.
//!
//! Scene entities are spawned by the headless logic with plain data
//! components; the windowed layer attaches meshes, materials and lights to
//! them from their `VisualSpec` / `SceneLight`.

use std::sync::Arc;

use bevy::prelude::*;

use crate::camera::{CameraController, CameraPreset};
use crate::config::Rgb;
use crate::geometry::SolidKind;
use crate::raycast::HitShape;

/// Marker for the single viewer camera. Reused across modes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

/// Orbital camera state owned by the camera entity.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub controller: CameraController,
}

impl OrbitCamera {
    pub fn new(preset: CameraPreset) -> Self {
        Self {
            controller: CameraController::new(preset),
        }
    }
}

/// Marker for the root entities a mode spawns. Roots are despawned with
/// their children on exit, so children never carry it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SceneEntity;

/// Which visibility layer an entity belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    WholeSolid,
    Fragment,
    Edges,
    Vertices,
    OrbitRing,
}

/// Entity that can be picked; `id` is echoed back on hit.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Selectable {
    pub id: String,
}

impl Selectable {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Pick shape in the entity's local space.
#[derive(Component, Debug, Clone)]
pub struct HitArea(pub HitShape);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
}

/// A sun or planet of the solar view.
#[derive(Component, Debug, Clone)]
pub struct CelestialBody {
    pub id: String,
    pub kind: BodyKind,
    pub orbit_distance: f32,
}

/// Parent node whose rotation is the revolution of its planet.
#[derive(Component, Debug, Clone, Default)]
pub struct OrbitGroup {
    pub orbital_speed: f32,
    /// Revolution angle in `[0, 2π)`.
    pub angle: f32,
}

/// Own rotation around the local Y axis, after a fixed tilt.
#[derive(Component, Debug, Clone, Default)]
pub struct Spin {
    pub speed: f32,
    /// Spin angle in `[0, 2π)`.
    pub angle: f32,
    /// Axial tilt (radians) applied around Z before the spin.
    pub tilt: f32,
}

impl Spin {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.tilt) * Quat::from_rotation_y(self.angle)
    }
}

/// Root of the geometric solid; parent of its mesh, fragments and overlays.
#[derive(Component, Debug, Clone)]
pub struct SolidRoot {
    pub kind: SolidKind,
}

/// The solid drawn as one mesh.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct WholeSolid;

/// One triangle of the solid shown while decomposed.
#[derive(Component, Debug, Clone)]
pub struct FaceFragment {
    pub index: usize,
    /// Position of the fragment centroid when assembled.
    pub rest: Vec3,
    pub exploded_offset: Vec3,
    pub exploded_rotation: Quat,
}

impl FaceFragment {
    pub fn exploded_transform(&self) -> Transform {
        Transform::from_translation(self.rest + self.exploded_offset)
            .with_rotation(self.exploded_rotation)
    }
}

/// Whether the faces of the mesh are filled; toggled by the faces layer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceFill(pub bool);

/// Wireframe overlay (feature edges, solid-local).
#[derive(Component, Debug, Clone)]
pub struct EdgeSet {
    pub segments: Arc<[[Vec3; 2]]>,
}

/// Deduplicated corner markers (solid-local).
#[derive(Component, Debug, Clone)]
pub struct VertexCloud {
    pub points: Arc<[Vec3]>,
}

/// Orbit path of one planet, drawn on the XZ plane.
#[derive(Component, Debug, Clone)]
pub struct OrbitRing {
    pub radius: f32,
    pub color: Rgb,
}

/// Backdrop stars of the solar view.
#[derive(Component, Debug, Clone)]
pub struct StarField {
    pub points: Arc<[Vec3]>,
}

/// Reference grid under the solid.
#[derive(Component, Debug, Clone)]
pub struct ReferenceGrid {
    pub lines: Arc<[[Vec3; 2]]>,
}

/// What the windowed layer should draw for an entity.
#[derive(Component, Debug, Clone, PartialEq)]
pub enum VisualSpec {
    Sphere {
        radius: f32,
        color: Rgb,
        emissive: bool,
    },
    /// Flat-shaded triangle list in local space.
    Triangles {
        triangles: Arc<[[Vec3; 3]]>,
        color: Rgb,
    },
    /// Flat ring on the entity's XZ plane.
    Ring {
        inner: f32,
        outer: f32,
        color: Rgb,
    },
    Points {
        points: Arc<[Vec3]>,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSpec {
    Point { intensity: f32, range: f32 },
    Directional { illuminance: f32 },
}

/// Light source; the windowed layer attaches the actual light component.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SceneLight(pub LightSpec);
