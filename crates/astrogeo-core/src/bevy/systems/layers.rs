//! Visibility of the optional layers and the decomposed view.

use bevy::prelude::*;

use crate::bevy::{FaceFill, FaceFragment, FrameContext, LayerRole};

fn layer_visible(role: LayerRole, frame: &FrameContext) -> bool {
    match role {
        LayerRole::WholeSolid => !frame.decomposed,
        LayerRole::Fragment => frame.decomposed,
        LayerRole::Edges => frame.layers.edges && !frame.decomposed,
        LayerRole::Vertices => frame.layers.vertices && !frame.decomposed,
        LayerRole::OrbitRing => frame.show_orbits,
    }
}

/// Applies the layer flags to every layered entity.
///
/// The whole solid and its fragments are mutually exclusive; overlays are
/// hidden while decomposed.
pub fn apply_layer_visibility(
    frame: Res<FrameContext>,
    mut layered: Query<(&LayerRole, &mut Visibility)>,
    mut fragments: Query<(&FaceFragment, &mut Transform)>,
    mut fills: Query<&mut FaceFill>,
) {
    for (role, mut visibility) in layered.iter_mut() {
        let wanted = if layer_visible(*role, &frame) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }

    for (fragment, mut transform) in fragments.iter_mut() {
        let wanted = if frame.decomposed {
            fragment.exploded_transform()
        } else {
            Transform::from_translation(fragment.rest)
        };
        transform.set_if_neq(wanted);
    }

    for mut fill in fills.iter_mut() {
        fill.set_if_neq(FaceFill(frame.layers.faces));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerFlags;

    #[test]
    fn whole_and_fragments_are_exclusive() {
        for decomposed in [false, true] {
            let frame = FrameContext {
                decomposed,
                layers: LayerFlags {
                    faces: true,
                    edges: true,
                    vertices: true,
                },
                ..FrameContext::default()
            };
            assert_ne!(
                layer_visible(LayerRole::WholeSolid, &frame),
                layer_visible(LayerRole::Fragment, &frame)
            );
            assert_eq!(layer_visible(LayerRole::Edges, &frame), !decomposed);
            assert_eq!(layer_visible(LayerRole::Vertices, &frame), !decomposed);
        }
    }
}
