//! Scene lifecycle: spawning each mode's entities and tearing them down.
//!
//! Only plain data components are spawned here. Meshes, materials and
//! lights are attached by the rendering systems when a window exists.

use std::sync::Arc;

use bevy::prelude::*;

use crate::animation::SOLID_SPIN_SPEED;
use crate::bevy::{
    BodyKind, CelestialBody, EdgeSet, FaceFill, FaceFragment, FollowState, HitArea, LayerRole,
    LightSpec, MainCamera, OrbitCamera, OrbitGroup, OrbitRing, PointerInteraction,
    ReferenceGrid, SceneEntity, SceneLight, SceneSources, Selectable, SolidRoot, Spin, StarField,
    VertexCloud, ViewTicks, ViewerConfig, VisualSpec, WholeSolid,
};
use crate::camera::CameraPreset;
use crate::config::Rgb;
use crate::geometry::{
    BodyVisual, STAR_COUNT, STAR_FIELD_RADIUS, STAR_FIELD_SEED, SolidGeometry, grid_lines,
    star_field,
};
use crate::raycast::HitShape;

/// Spin of the sun around its own axis, per frame at speed 1.
const SUN_SPIN_SPEED: f32 = 0.004;

/// Axial tilt of the displayed solid so its top face is visible.
const SOLID_TILT: f32 = 0.3;

/// Initial revolution offset between consecutive planets (golden angle).
const PLANET_PHASE_STEP: f32 = 2.399_963;

const ORBIT_RING_COLOR: Rgb = [90, 90, 120];
const STAR_COLOR: Rgb = [235, 235, 255];

// ============================================================================
// Camera
// ============================================================================

/// Sets up or reconfigures the camera with `preset`.
///
/// The camera entity survives mode switches; only its controller is replaced.
fn setup_camera(
    commands: &mut Commands,
    existing: &mut Query<&mut OrbitCamera, With<MainCamera>>,
    preset: CameraPreset,
) {
    if let Ok(mut camera) = existing.single_mut() {
        *camera = OrbitCamera::new(preset);
        tracing::info!("[viewer] camera reconfigured");
    } else {
        let camera = OrbitCamera::new(preset);
        commands.spawn((MainCamera, camera.controller.transform(), camera));
        tracing::info!("[viewer] camera spawned");
    }
}

pub fn setup_solids_camera(
    mut commands: Commands,
    mut existing: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    setup_camera(&mut commands, &mut existing, CameraPreset::SOLIDS);
}

pub fn setup_solar_camera(
    mut commands: Commands,
    mut existing: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    setup_camera(&mut commands, &mut existing, CameraPreset::SOLAR);
}

// ============================================================================
// Solids
// ============================================================================

pub fn spawn_solids_scene(mut commands: Commands, sources: Res<SceneSources>) {
    let config = &sources.solids;
    let geometry = SolidGeometry::build(config.kind(), config.size);
    let id = geometry.kind.id();
    let color = config.color;
    tracing::info!(
        "[viewer] spawning solid {} ({} faces, {} edges, {} vertices)",
        id,
        geometry.faces.len(),
        geometry.edges.len(),
        geometry.vertices.len()
    );

    let triangles: Arc<[[Vec3; 3]]> = geometry.faces.iter().map(|face| face.corners).collect();
    let segments: Arc<[[Vec3; 2]]> = geometry.edges.iter().copied().collect();
    let points: Arc<[Vec3]> = geometry.vertices.iter().copied().collect();

    commands
        .spawn((
            SceneEntity,
            SolidRoot {
                kind: geometry.kind,
            },
            Spin {
                speed: SOLID_SPIN_SPEED,
                angle: 0.0,
                tilt: SOLID_TILT,
            },
            Transform::from_rotation(Quat::from_rotation_z(SOLID_TILT)),
            Visibility::Visible,
        ))
        .with_children(|solid| {
            solid.spawn((
                WholeSolid,
                LayerRole::WholeSolid,
                Selectable::new(id),
                HitArea(HitShape::Triangles(triangles.clone())),
                FaceFill(config.layers.faces),
                VisualSpec::Triangles { triangles, color },
                Transform::IDENTITY,
                Visibility::Inherited,
            ));

            for (index, face) in geometry.faces.iter().enumerate() {
                let local: Arc<[[Vec3; 3]]> = Arc::new([face.local_corners()]);
                solid.spawn((
                    FaceFragment {
                        index,
                        rest: face.centroid,
                        exploded_offset: geometry.exploded_offset(index),
                        exploded_rotation: geometry.exploded_rotation(index),
                    },
                    LayerRole::Fragment,
                    Selectable::new(id),
                    HitArea(HitShape::Triangles(local.clone())),
                    FaceFill(config.layers.faces),
                    VisualSpec::Triangles {
                        triangles: local,
                        color,
                    },
                    Transform::from_translation(face.centroid),
                    Visibility::Hidden,
                ));
            }

            solid.spawn((
                EdgeSet { segments },
                LayerRole::Edges,
                Transform::IDENTITY,
                Visibility::Hidden,
            ));
            solid.spawn((
                VertexCloud { points },
                LayerRole::Vertices,
                Transform::IDENTITY,
                Visibility::Hidden,
            ));
        });

    let floor = -config.size * 1.4;
    commands.spawn((
        SceneEntity,
        ReferenceGrid {
            lines: grid_lines(config.size * 4.0, 16, floor).into(),
        },
        Transform::IDENTITY,
        Visibility::Visible,
    ));
    commands.spawn((
        SceneEntity,
        SceneLight(LightSpec::Directional {
            illuminance: 6_000.0,
        }),
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// ============================================================================
// Solar system
// ============================================================================

pub fn spawn_solar_scene(mut commands: Commands, sources: Res<SceneSources>) {
    let config = &sources.solar;
    tracing::info!(
        "[viewer] spawning solar system with {} planets",
        config.planets().count()
    );

    let sun = BodyVisual::sun(&config.sun);
    commands.spawn((
        SceneEntity,
        CelestialBody {
            id: config.sun.id.clone(),
            kind: BodyKind::Sun,
            orbit_distance: 0.0,
        },
        Selectable::new(config.sun.id.clone()),
        HitArea(HitShape::Sphere { radius: sun.radius }),
        Spin {
            speed: SUN_SPIN_SPEED,
            ..default()
        },
        VisualSpec::Sphere {
            radius: sun.radius,
            color: config.sun.color,
            emissive: true,
        },
        Transform::IDENTITY,
        Visibility::Visible,
    ));
    commands.spawn((
        SceneEntity,
        SceneLight(LightSpec::Point {
            intensity: 2.0e7,
            range: 400.0,
        }),
        Transform::IDENTITY,
    ));

    for (index, planet) in config.planets().enumerate() {
        let visual = BodyVisual::planet(planet);
        #[allow(clippy::cast_precision_loss)]
        let phase = (index as f32 * PLANET_PHASE_STEP).rem_euclid(std::f32::consts::TAU);
        let spin = Spin {
            speed: planet.spin_speed,
            angle: 0.0,
            tilt: visual.tilt,
        };

        commands
            .spawn((
                SceneEntity,
                OrbitGroup {
                    orbital_speed: planet.orbital_speed,
                    angle: phase,
                },
                Transform::from_rotation(Quat::from_rotation_y(phase)),
                Visibility::Visible,
            ))
            .with_children(|group| {
                group
                    .spawn((
                        CelestialBody {
                            id: planet.id.clone(),
                            kind: BodyKind::Planet,
                            orbit_distance: planet.distance,
                        },
                        Selectable::new(planet.id.clone()),
                        HitArea(HitShape::Sphere {
                            radius: visual.radius,
                        }),
                        VisualSpec::Sphere {
                            radius: visual.radius,
                            color: planet.color,
                            emissive: false,
                        },
                        Transform::from_xyz(planet.distance, 0.0, 0.0)
                            .with_rotation(spin.rotation()),
                        spin,
                        Visibility::Inherited,
                    ))
                    .with_children(|body| {
                        if let Some(ring) = &planet.ring {
                            body.spawn((
                                VisualSpec::Ring {
                                    inner: ring.inner_radius,
                                    outer: ring.outer_radius,
                                    color: ring.color,
                                },
                                Transform::IDENTITY,
                                Visibility::Inherited,
                            ));
                        }
                    });
            });

        commands.spawn((
            SceneEntity,
            OrbitRing {
                radius: visual.orbit_radius,
                color: ORBIT_RING_COLOR,
            },
            LayerRole::OrbitRing,
            Transform::IDENTITY,
            Visibility::Visible,
        ));
    }

    let stars: Arc<[Vec3]> = star_field(STAR_COUNT, STAR_FIELD_RADIUS, STAR_FIELD_SEED).into();
    commands.spawn((
        SceneEntity,
        StarField {
            points: stars.clone(),
        },
        VisualSpec::Points {
            points: stars,
            color: STAR_COLOR,
        },
        Transform::IDENTITY,
        Visibility::Visible,
    ));
}

// ============================================================================
// Shared lifecycle
// ============================================================================

/// Primes the tick triggers and clears per-mode state on entering a mode.
pub fn reset_view_state(
    config: Res<ViewerConfig>,
    mut ticks: ResMut<ViewTicks>,
    mut follow: ResMut<FollowState>,
    mut interaction: ResMut<PointerInteraction>,
) {
    *ticks = ViewTicks::primed(&config);
    follow.cancel();
    interaction.resolver.clear();
}

/// Despawns every scene root (and with it, their children).
///
/// NOTE: The camera is kept; the next mode's OnEnter reconfigures it.
pub fn cleanup_scene(
    mut commands: Commands,
    roots: Query<Entity, With<SceneEntity>>,
    mut follow: ResMut<FollowState>,
    mut interaction: ResMut<PointerInteraction>,
) {
    tracing::info!("[viewer] cleanup_scene: {} roots", roots.iter().count());
    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
    follow.cancel();
    interaction.resolver.clear();
}
