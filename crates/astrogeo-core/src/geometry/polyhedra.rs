//! Triangle soups for the supported solids.
//!
//! Every solid is centred on its local origin, scaled so its farthest
//! corner sits at `size`, and wound counter-clockwise seen from outside.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Supported solid shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidKind {
    #[default]
    Cube,
    Tetrahedron,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    Prism,
    Pyramid,
}

impl SolidKind {
    pub const ALL: [Self; 7] = [
        Self::Cube,
        Self::Tetrahedron,
        Self::Octahedron,
        Self::Dodecahedron,
        Self::Icosahedron,
        Self::Prism,
        Self::Pyramid,
    ];

    /// Resolves a content id. Unknown ids fall back to the cube.
    pub fn from_id(id: &str) -> Self {
        match Self::ALL.iter().find(|kind| kind.id() == id) {
            Some(kind) => *kind,
            None => {
                tracing::warn!("[geometry] unknown solid '{}', falling back to cube", id);
                Self::Cube
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Cube => "cubo",
            Self::Tetrahedron => "tetraedro",
            Self::Octahedron => "octaedro",
            Self::Dodecahedron => "dodecaedro",
            Self::Icosahedron => "icosaedro",
            Self::Prism => "prisma",
            Self::Pyramid => "piramide",
        }
    }
}

/// Corner positions plus polygon faces (indices into the corners).
struct Polyhedron {
    vertices: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
}

/// Builds the non-indexed triangle list for `kind`.
pub fn raw_triangles(kind: SolidKind, size: f32) -> Vec<[Vec3; 3]> {
    let polyhedron = match kind {
        SolidKind::Cube => cube(),
        SolidKind::Tetrahedron => {
            let vertices = vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(-1.0, -1.0, 1.0),
            ];
            let edge = vertices[0].distance(vertices[1]);
            faces_by_edge_length(vertices, edge)
        }
        SolidKind::Octahedron => {
            let vertices = vec![Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
            faces_by_edge_length(vertices, std::f32::consts::SQRT_2)
        }
        SolidKind::Icosahedron => icosahedron(),
        SolidKind::Dodecahedron => dodecahedron(),
        SolidKind::Prism => prism(),
        SolidKind::Pyramid => pyramid(),
    };
    triangulate(&polyhedron, size)
}

fn cube() -> Polyhedron {
    let vertices = (0..8)
        .map(|i| {
            let axis = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
            Vec3::new(axis(1), axis(2), axis(4))
        })
        .collect();
    let faces = vec![
        vec![0, 2, 6, 4],
        vec![1, 3, 7, 5],
        vec![0, 1, 5, 4],
        vec![2, 3, 7, 6],
        vec![0, 1, 3, 2],
        vec![4, 5, 7, 6],
    ];
    Polyhedron { vertices, faces }
}

fn icosahedron() -> Polyhedron {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut vertices = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-phi, phi] {
            vertices.push(Vec3::new(0.0, a, b));
            vertices.push(Vec3::new(a, b, 0.0));
            vertices.push(Vec3::new(b, 0.0, a));
        }
    }
    faces_by_edge_length(vertices, 2.0)
}

/// Dual of the icosahedron: one corner per icosahedron face, one pentagon
/// per icosahedron corner.
fn dodecahedron() -> Polyhedron {
    let ico = icosahedron();
    let vertices: Vec<Vec3> = ico
        .faces
        .iter()
        .map(|face| face.iter().map(|&i| ico.vertices[i]).sum::<Vec3>() / 3.0)
        .collect();

    let faces = ico
        .vertices
        .iter()
        .enumerate()
        .map(|(corner, position)| {
            let axis = position.normalize();
            let u = axis.any_orthonormal_vector();
            let w = axis.cross(u);
            let mut ring: Vec<usize> = ico
                .faces
                .iter()
                .enumerate()
                .filter(|(_, face)| face.contains(&corner))
                .map(|(index, _)| index)
                .collect();
            ring.sort_by(|&a, &b| {
                let angle = |i: usize| vertices[i].dot(w).atan2(vertices[i].dot(u));
                angle(a).total_cmp(&angle(b))
            });
            ring
        })
        .collect();

    Polyhedron { vertices, faces }
}

fn prism() -> Polyhedron {
    let mut vertices = Vec::with_capacity(6);
    for y in [1.0, -1.0] {
        for step in 0..3u8 {
            let angle = f32::from(step) * std::f32::consts::TAU / 3.0;
            vertices.push(Vec3::new(angle.sin(), y, angle.cos()));
        }
    }
    let faces = vec![
        vec![0, 1, 2],
        vec![3, 4, 5],
        vec![0, 1, 4, 3],
        vec![1, 2, 5, 4],
        vec![2, 0, 3, 5],
    ];
    Polyhedron { vertices, faces }
}

fn pyramid() -> Polyhedron {
    let vertices = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let faces = vec![
        vec![0, 1, 2, 3],
        vec![0, 1, 4],
        vec![1, 2, 4],
        vec![2, 3, 4],
        vec![3, 0, 4],
    ];
    Polyhedron { vertices, faces }
}

/// Faces of a deltahedron: every triple whose three sides equal `edge`.
fn faces_by_edge_length(vertices: Vec<Vec3>, edge: f32) -> Polyhedron {
    let is_edge = |a: usize, b: usize| (vertices[a].distance(vertices[b]) - edge).abs() < 1e-3;
    let n = vertices.len();
    let mut faces = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !is_edge(i, j) {
                continue;
            }
            for k in (j + 1)..n {
                if is_edge(i, k) && is_edge(j, k) {
                    faces.push(vec![i, j, k]);
                }
            }
        }
    }
    Polyhedron { vertices, faces }
}

/// Fan-triangulates every face, scales to `size` and orients outward.
fn triangulate(polyhedron: &Polyhedron, size: f32) -> Vec<[Vec3; 3]> {
    let radius = polyhedron
        .vertices
        .iter()
        .map(|v| v.length())
        .fold(0.0_f32, f32::max)
        .max(f32::EPSILON);
    let scale = size / radius;
    let points: Vec<Vec3> = polyhedron.vertices.iter().map(|v| *v * scale).collect();
    #[allow(clippy::cast_precision_loss)]
    let center = points.iter().sum::<Vec3>() / points.len() as f32;

    let mut triangles = Vec::new();
    for face in &polyhedron.faces {
        for pair in face[1..].windows(2) {
            let (a, mut b, mut c) = (points[face[0]], points[pair[0]], points[pair[1]]);
            let normal = (b - a).cross(c - a);
            if normal.dot((a + b + c) / 3.0 - center) < 0.0 {
                std::mem::swap(&mut b, &mut c);
            }
            triangles.push([a, b, c]);
        }
    }
    triangles
}
