//! Ray picking against spheres and triangle meshes.

use std::sync::Arc;

use bevy::math::{Dir3, Ray3d, Vec2, Vec3};
use bevy::transform::components::Transform;

const EPSILON: f32 = 1e-6;

/// Pointer position in pixels (origin top-left) to normalized device
/// coordinates (origin centre, +Y up). `None` for an empty viewport.
pub fn to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        pointer.x / viewport.x * 2.0 - 1.0,
        -(pointer.y / viewport.y * 2.0 - 1.0),
    ))
}

/// Ray from a perspective camera placed by `camera` through `ndc`.
pub fn pick_ray(camera: &Transform, fov_y: f32, aspect: f32, ndc: Vec2) -> Option<Ray3d> {
    let half_height = (fov_y * 0.5).tan();
    let half_width = half_height * aspect;
    let direction = *camera.forward()
        + *camera.right() * (ndc.x * half_width)
        + *camera.up() * (ndc.y * half_height);
    Some(Ray3d {
        origin: camera.translation,
        direction: Dir3::new(direction).ok()?,
    })
}

/// Distance along the ray to the first sphere intersection in front of it.
pub fn ray_sphere(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(*ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    [-b - root, -b + root].into_iter().find(|t| *t >= 0.0)
}

/// Möller–Trumbore, double sided.
pub fn ray_triangle(ray: &Ray3d, [a, b, c]: [Vec3; 3]) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}

/// Pickable shape in the entity's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum HitShape {
    Sphere { radius: f32 },
    Triangles(Arc<[[Vec3; 3]]>),
}

impl HitShape {
    pub fn triangles(triangles: Vec<[Vec3; 3]>) -> Self {
        Self::Triangles(triangles.into())
    }

    /// Intersection distance with this shape placed by `world`.
    pub fn intersect(&self, ray: &Ray3d, world: &Transform) -> Option<f32> {
        match self {
            Self::Sphere { radius } => {
                ray_sphere(ray, world.translation, radius * world.scale.max_element())
            }
            Self::Triangles(triangles) => triangles
                .iter()
                .filter_map(|t| ray_triangle(ray, t.map(|corner| world.transform_point(corner))))
                .min_by(f32::total_cmp),
        }
    }
}

/// One selectable entity as seen by the picker.
#[derive(Debug, Clone, Copy)]
pub struct HitCandidate<'a> {
    pub id: &'a str,
    pub shape: &'a HitShape,
    pub world: Transform,
    pub visible: bool,
}

/// Id and distance of the nearest visible candidate hit by `ray`.
pub fn nearest_hit<'a>(
    ray: &Ray3d,
    candidates: impl IntoIterator<Item = HitCandidate<'a>>,
) -> Option<(&'a str, f32)> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.visible)
        .filter_map(|candidate| {
            candidate
                .shape
                .intersect(ray, &candidate.world)
                .map(|distance| (candidate.id, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d {
            origin,
            direction: Dir3::new(direction).unwrap(),
        }
    }

    #[test]
    fn ndc_maps_corners_and_centre() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(to_ndc(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
        assert_eq!(to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(to_ndc(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(to_ndc(Vec2::ZERO, Vec2::new(0.0, 600.0)), None);
    }

    fn camera_at(eye: Vec3) -> Transform {
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn centre_ray_points_at_target() {
        let r = pick_ray(&camera_at(Vec3::new(0.0, 0.0, 10.0)), 1.0, 1.5, Vec2::ZERO).unwrap();
        assert!(r.direction.distance(Vec3::NEG_Z) < 1e-6);
        assert_eq!(r.origin, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn edge_ray_spans_half_the_field_of_view() {
        let fov = std::f32::consts::FRAC_PI_2;
        let camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
        let r = pick_ray(&camera, fov, 1.0, Vec2::new(0.0, 1.0)).unwrap();
        let angle = r.direction.angle_between(Vec3::NEG_Z);
        assert!((angle - fov / 2.0).abs() < 1e-5);
        assert!(r.direction.y > 0.0);

        let right = pick_ray(&camera, fov, 2.0, Vec2::new(1.0, 0.0)).unwrap();
        assert!(right.direction.x > 0.0);
    }

    #[test]
    fn sphere_hits_front_surface_and_misses_behind() {
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!((ray_sphere(&r, Vec3::ZERO, 2.0).unwrap() - 8.0).abs() < 1e-5);
        assert!(ray_sphere(&r, Vec3::new(0.0, 5.0, 0.0), 2.0).is_none());
        assert!(ray_sphere(&r, Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
        // From inside, the exit point is reported.
        let inside = ray(Vec3::ZERO, Vec3::X);
        assert!((ray_sphere(&inside, Vec3::ZERO, 3.0).unwrap() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn triangle_hit_is_double_sided() {
        let tri = [Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
        let front = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let back = ray(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!((ray_triangle(&front, tri).unwrap() - 5.0).abs() < 1e-5);
        assert!((ray_triangle(&back, tri).unwrap() - 5.0).abs() < 1e-5);
        let miss = ray(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(ray_triangle(&miss, tri).is_none());
    }

    #[test]
    fn nearest_visible_candidate_wins() {
        let small = HitShape::Sphere { radius: 1.0 };
        let r = ray(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z);
        let candidates = [
            HitCandidate {
                id: "far",
                shape: &small,
                world: Transform::from_xyz(0.0, 0.0, -5.0),
                visible: true,
            },
            HitCandidate {
                id: "near",
                shape: &small,
                world: Transform::from_xyz(0.0, 0.0, 5.0),
                visible: true,
            },
            HitCandidate {
                id: "hidden",
                shape: &small,
                world: Transform::from_xyz(0.0, 0.0, 10.0),
                visible: false,
            },
        ];
        let (id, distance) = nearest_hit(&r, candidates).unwrap();
        assert_eq!(id, "near");
        assert!((distance - 14.0).abs() < 1e-4);
    }

    #[test]
    fn triangle_shape_respects_world_transform() {
        let shape = HitShape::triangles(vec![[
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]]);
        let r = ray(Vec3::new(4.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(shape.intersect(&r, &Transform::IDENTITY).is_none());
        assert!(shape.intersect(&r, &Transform::from_xyz(4.0, 0.0, 0.0)).is_some());
    }
}
