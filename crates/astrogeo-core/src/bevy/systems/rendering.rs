//! Rendering systems for the viewer.
//!
//! Attaches meshes, materials, lights and the 3D camera to the data-only
//! entities spawned by the scene systems, and draws the line overlays
//! (edges, vertices, orbits, grid) with Gizmos.
//!
//! Mesh and material handles live on the entities, so despawning a scene
//! releases its GPU assets.

use std::f32::consts::FRAC_PI_2;

use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::bevy::{
    EdgeSet, FaceFill, LightSpec, MainCamera, OrbitRing, PointerInteraction, ReferenceGrid,
    SceneLight, Selectable, VertexCloud, VisualSpec,
};
use crate::camera::FIELD_OF_VIEW;
use crate::config::Rgb;

/// Colors and sizes of the overlays.
#[derive(Resource)]
pub struct OverlayStyle {
    pub edge_color: Color,
    pub vertex_color: Color,
    pub vertex_radius: f32,
    pub grid_color: Color,
    /// Opacity of filled faces.
    pub face_alpha: f32,
    /// Emissive boost of the hovered body.
    pub hover_glow: LinearRgba,
    pub sun_glow: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            edge_color: Color::srgb(1.0, 1.0, 1.0),
            vertex_color: Color::srgb(1.0, 0.85, 0.2),
            vertex_radius: 0.06,
            grid_color: Color::srgba(0.6, 0.6, 0.7, 0.25),
            face_alpha: 0.85,
            hover_glow: LinearRgba::rgb(0.15, 0.15, 0.2),
            sun_glow: 4.0,
        }
    }
}

fn srgb(color: Rgb) -> Color {
    Color::srgb_u8(color[0], color[1], color[2])
}

fn with_alpha(color: Rgb, alpha: f32) -> Color {
    srgb(color).with_alpha(alpha)
}

/// Flat-shaded mesh from a triangle list; each triangle gets its own normal.
fn build_triangle_mesh(triangles: &[[Vec3; 3]]) -> Mesh {
    let mut positions = Vec::with_capacity(triangles.len() * 3);
    let mut normals = Vec::with_capacity(triangles.len() * 3);
    for [a, b, c] in triangles {
        let normal = (*b - *a).cross(*c - *a).normalize_or_zero();
        for corner in [a, b, c] {
            positions.push(corner.to_array());
            normals.push(normal.to_array());
        }
    }
    #[allow(clippy::cast_possible_truncation)]
    let indices: Vec<u32> = (0..positions.len() as u32).collect();

    Mesh::new(PrimitiveTopology::TriangleList, default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
}

fn build_point_mesh(points: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    Mesh::new(PrimitiveTopology::PointList, default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

/// Gives the camera entity its render components the first time it appears.
pub fn attach_camera_render(mut commands: Commands, cameras: Query<Entity, Added<MainCamera>>) {
    for entity in cameras.iter() {
        commands.entity(entity).insert((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: FIELD_OF_VIEW,
                near: 0.1,
                far: 2_000.0,
                ..default()
            }),
            AmbientLight {
                brightness: 150.0,
                ..default()
            },
        ));
        tracing::info!("[viewer] camera render components attached");
    }
}

/// Builds meshes and materials for newly spawned visuals.
pub fn attach_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    style: Res<OverlayStyle>,
    visuals: Query<(Entity, &VisualSpec, Option<&FaceFill>), Added<VisualSpec>>,
) {
    for (entity, spec, fill) in visuals.iter() {
        let (mesh, material) = match spec {
            VisualSpec::Sphere {
                radius,
                color,
                emissive,
            } => {
                let material = if *emissive {
                    StandardMaterial {
                        base_color: srgb(*color),
                        emissive: LinearRgba::from(srgb(*color)) * style.sun_glow,
                        unlit: true,
                        ..default()
                    }
                } else {
                    StandardMaterial {
                        base_color: srgb(*color),
                        perceptual_roughness: 0.9,
                        ..default()
                    }
                };
                (Sphere::new(*radius).mesh().uv(32, 18), material)
            }
            VisualSpec::Triangles { triangles, color } => {
                let filled = fill.is_none_or(|fill| fill.0);
                let alpha = if filled { style.face_alpha } else { 0.0 };
                (
                    build_triangle_mesh(triangles),
                    StandardMaterial {
                        base_color: with_alpha(*color, alpha),
                        alpha_mode: AlphaMode::Blend,
                        double_sided: true,
                        cull_mode: None,
                        ..default()
                    },
                )
            }
            VisualSpec::Ring {
                inner,
                outer,
                color,
            } => (
                Mesh::from(Annulus::new(*inner, *outer))
                    .rotated_by(Quat::from_rotation_x(-FRAC_PI_2)),
                StandardMaterial {
                    base_color: with_alpha(*color, 0.8),
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                },
            ),
            VisualSpec::Points { points, color } => (
                build_point_mesh(points),
                StandardMaterial {
                    base_color: srgb(*color),
                    unlit: true,
                    ..default()
                },
            ),
        };
        commands.entity(entity).insert((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(material)),
        ));
    }
}

pub fn attach_scene_lights(
    mut commands: Commands,
    lights: Query<(Entity, &SceneLight), Added<SceneLight>>,
) {
    for (entity, light) in lights.iter() {
        match light.0 {
            LightSpec::Point { intensity, range } => {
                commands.entity(entity).insert(PointLight {
                    intensity,
                    range,
                    shadows_enabled: false,
                    ..default()
                });
            }
            LightSpec::Directional { illuminance } => {
                commands.entity(entity).insert(DirectionalLight {
                    illuminance,
                    ..default()
                });
            }
        }
    }
}

/// Applies the faces layer to the solid's material opacity.
pub fn update_face_fill(
    style: Res<OverlayStyle>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    fills: Query<(&FaceFill, &MeshMaterial3d<StandardMaterial>), Changed<FaceFill>>,
) {
    for (fill, material) in fills.iter() {
        if let Some(material) = materials.get_mut(&material.0) {
            let alpha = if fill.0 { style.face_alpha } else { 0.0 };
            material.base_color.set_alpha(alpha);
        }
    }
}

/// Glows the hovered body; emissive bodies keep their own glow.
pub fn highlight_hovered(
    style: Res<OverlayStyle>,
    interaction: Res<PointerInteraction>,
    mut last: Local<Option<String>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bodies: Query<(&Selectable, &VisualSpec, &MeshMaterial3d<StandardMaterial>)>,
) {
    let hovered = interaction.resolver.hovered();
    if hovered == last.as_deref() {
        return;
    }
    for (selectable, spec, material) in bodies.iter() {
        if matches!(spec, VisualSpec::Sphere { emissive: true, .. }) {
            continue;
        }
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        material.emissive = if Some(selectable.id.as_str()) == hovered {
            style.hover_glow
        } else {
            LinearRgba::BLACK
        };
    }
    *last = hovered.map(str::to_string);
}

/// Draws the line overlays of visible entities.
pub fn draw_overlays(
    mut gizmos: Gizmos,
    style: Res<OverlayStyle>,
    edges: Query<(&EdgeSet, &GlobalTransform, &InheritedVisibility)>,
    vertices: Query<(&VertexCloud, &GlobalTransform, &InheritedVisibility)>,
    rings: Query<(&OrbitRing, &InheritedVisibility)>,
    grids: Query<(&ReferenceGrid, &InheritedVisibility)>,
) {
    for (edge_set, transform, visibility) in edges.iter() {
        if !visibility.get() {
            continue;
        }
        for [a, b] in edge_set.segments.iter() {
            gizmos.line(
                transform.transform_point(*a),
                transform.transform_point(*b),
                style.edge_color,
            );
        }
    }

    for (cloud, transform, visibility) in vertices.iter() {
        if !visibility.get() {
            continue;
        }
        for point in cloud.points.iter() {
            gizmos.sphere(
                Isometry3d::from_translation(transform.transform_point(*point)),
                style.vertex_radius,
                style.vertex_color,
            );
        }
    }

    let flat = Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2));
    for (ring, visibility) in rings.iter() {
        if visibility.get() {
            gizmos
                .circle(flat, ring.radius, srgb(ring.color))
                .resolution(128);
        }
    }

    for (grid, visibility) in grids.iter() {
        if !visibility.get() {
            continue;
        }
        for [a, b] in grid.lines.iter() {
            gizmos.line(*a, *b, style.grid_color);
        }
    }
}
