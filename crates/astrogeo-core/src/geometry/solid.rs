//! Per-solid derived geometry: deduplicated corners, feature edges and the
//! cached face data used by the decomposition view.

use std::collections::HashMap;

use bevy::math::{Quat, Vec3};

use super::polyhedra::{SolidKind, raw_triangles};

/// Corners closer than 1/VERTEX_PRECISION on every axis are merged.
pub const VERTEX_PRECISION: f32 = 100.0;

/// Adjacent faces meeting at less than this angle share no drawn edge.
pub const FEATURE_EDGE_THRESHOLD_DEG: f32 = 1.0;

/// How far an exploded face travels along its outward direction.
pub const EXPLODE_DISTANCE: f32 = 0.8;

/// Rotation step applied to exploded faces, cycled by face index.
pub const EXPLODE_TWIST: f32 = 0.06;

/// One triangle of a solid, cached at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceData {
    pub corners: [Vec3; 3],
    pub centroid: Vec3,
    /// Centroid direction from the solid's local origin.
    pub direction: Vec3,
    pub normal: Vec3,
}

impl FaceData {
    fn new(corners: [Vec3; 3]) -> Self {
        let [a, b, c] = corners;
        let centroid = (a + b + c) / 3.0;
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let direction = centroid.try_normalize().unwrap_or(normal);
        Self {
            corners,
            centroid,
            direction,
            normal,
        }
    }

    /// Corners relative to the centroid, for a fragment placed at the centroid.
    pub fn local_corners(&self) -> [Vec3; 3] {
        self.corners.map(|corner| corner - self.centroid)
    }
}

#[derive(Debug, Clone)]
pub struct SolidGeometry {
    pub kind: SolidKind,
    pub size: f32,
    pub vertices: Vec<Vec3>,
    pub faces: Vec<FaceData>,
    pub edges: Vec<[Vec3; 2]>,
}

fn vertex_key(v: Vec3) -> [i32; 3] {
    (v * VERTEX_PRECISION).round().as_ivec3().to_array()
}

impl SolidGeometry {
    pub fn build(kind: SolidKind, size: f32) -> Self {
        let triangles = raw_triangles(kind, size);

        let mut vertices = Vec::new();
        let mut index_of: HashMap<[i32; 3], usize> = HashMap::new();
        let mut corner_index = |v: Vec3| {
            *index_of.entry(vertex_key(v)).or_insert_with(|| {
                vertices.push(v);
                vertices.len() - 1
            })
        };

        let faces: Vec<FaceData> = triangles.iter().map(|t| FaceData::new(*t)).collect();

        // Edge -> normals of the faces that share it, in first-seen order.
        let mut edge_slots: HashMap<(usize, usize), usize> = HashMap::new();
        let mut edge_faces: Vec<([Vec3; 2], Vec<Vec3>)> = Vec::new();
        for face in &faces {
            let ids = face.corners.map(&mut corner_index);
            for (a, b) in [(0, 1), (1, 2), (2, 0)] {
                let key = (ids[a].min(ids[b]), ids[a].max(ids[b]));
                let slot = *edge_slots.entry(key).or_insert_with(|| {
                    edge_faces.push(([face.corners[a], face.corners[b]], Vec::new()));
                    edge_faces.len() - 1
                });
                edge_faces[slot].1.push(face.normal);
            }
        }

        let threshold = FEATURE_EDGE_THRESHOLD_DEG.to_radians().cos();
        let edges = edge_faces
            .into_iter()
            .filter(|(_, normals)| match normals.as_slice() {
                [a, b] => a.dot(*b) <= threshold,
                _ => true,
            })
            .map(|(segment, _)| segment)
            .collect();

        Self {
            kind,
            size,
            vertices,
            faces,
            edges,
        }
    }

    /// Outward offset of face `index` while exploded.
    pub fn exploded_offset(&self, index: usize) -> Vec3 {
        self.faces
            .get(index)
            .map_or(Vec3::ZERO, |face| face.direction * EXPLODE_DISTANCE)
    }

    /// Small twist of face `index` around its own direction while exploded.
    pub fn exploded_rotation(&self, index: usize) -> Quat {
        let Some(face) = self.faces.get(index) else {
            return Quat::IDENTITY;
        };
        #[allow(clippy::cast_precision_loss)]
        let step = (index % 5) as f32 - 2.0;
        Quat::from_axis_angle(face.direction, step * EXPLODE_TWIST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_vertex_cloud_is_deduplicated() {
        let cube = SolidGeometry::build(SolidKind::Cube, 1.5);
        assert_eq!(cube.faces.len() * 3, 36);
        assert_eq!(cube.vertices.len(), 8);
    }

    #[test]
    fn vertex_and_edge_counts_match_the_solids() {
        let expected = [
            (SolidKind::Cube, 8, 12),
            (SolidKind::Tetrahedron, 4, 6),
            (SolidKind::Octahedron, 6, 12),
            (SolidKind::Dodecahedron, 20, 30),
            (SolidKind::Icosahedron, 12, 30),
            (SolidKind::Prism, 6, 9),
            (SolidKind::Pyramid, 5, 8),
        ];
        for (kind, vertices, edges) in expected {
            let solid = SolidGeometry::build(kind, 1.0);
            assert_eq!(solid.vertices.len(), vertices, "{kind:?} vertices");
            assert_eq!(solid.edges.len(), edges, "{kind:?} edges");
        }
    }

    #[test]
    fn face_directions_point_away_from_origin() {
        let solid = SolidGeometry::build(SolidKind::Octahedron, 2.0);
        for (i, face) in solid.faces.iter().enumerate() {
            assert!((face.direction.length() - 1.0).abs() < 1e-5);
            assert!(face.direction.dot(face.centroid) > 0.0);
            let offset = solid.exploded_offset(i);
            assert!((offset.length() - EXPLODE_DISTANCE).abs() < 1e-5);
        }
    }

    #[test]
    fn local_corners_are_centred() {
        let solid = SolidGeometry::build(SolidKind::Tetrahedron, 1.0);
        let sum: Vec3 = solid.faces[0].local_corners().into_iter().sum();
        assert!(sum.length() < 1e-5);
    }

    #[test]
    fn exploded_rotation_is_small() {
        let solid = SolidGeometry::build(SolidKind::Icosahedron, 1.0);
        for i in 0..solid.faces.len() {
            let (_, angle) = solid.exploded_rotation(i).to_axis_angle();
            assert!(angle <= 2.0 * EXPLODE_TWIST + 1e-4, "face {i}: {angle}");
        }
        assert_eq!(solid.exploded_rotation(999), Quat::IDENTITY);
    }
}
