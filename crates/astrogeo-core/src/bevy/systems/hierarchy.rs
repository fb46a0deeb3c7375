//! World transforms of scene entities, composed from the parent chain.
//!
//! Per-frame logic cannot rely on `GlobalTransform` (it is only propagated
//! in PostUpdate), so positions are composed from local transforms here.

use bevy::prelude::*;

/// Read access to local transforms and parent links.
pub type TransformTree<'w, 's> = Query<'w, 's, (&'static Transform, Option<&'static ChildOf>)>;

/// Scene hierarchies are shallow; this only guards against malformed chains.
const MAX_DEPTH: usize = 16;

/// World transform of `entity` from its local transform and ancestors.
pub fn world_transform(entity: Entity, tree: &TransformTree) -> Transform {
    let mut world = Transform::IDENTITY;
    let mut current = Some(entity);
    for _ in 0..MAX_DEPTH {
        let Some(node) = current else {
            break;
        };
        let Ok((local, parent)) = tree.get(node) else {
            break;
        };
        world = local.mul_transform(world);
        current = parent.map(ChildOf::parent);
    }
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn composes_parent_chain() {
        let mut world = World::new();
        let root = world
            .spawn(Transform::from_rotation(Quat::from_rotation_y(
                std::f32::consts::FRAC_PI_2,
            )))
            .id();
        let child = world
            .spawn((Transform::from_xyz(10.0, 0.0, 0.0), ChildOf(root)))
            .id();

        let position = world
            .run_system_once(move |tree: TransformTree| world_transform(child, &tree).translation)
            .unwrap();
        // +X rotated a quarter turn about Y lands on -Z.
        assert!(position.distance(Vec3::new(0.0, 0.0, -10.0)) < 1e-4);
    }
}
