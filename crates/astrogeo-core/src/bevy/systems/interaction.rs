//! Pointer interaction system.
//!
//! Feeds raw pointer samples through the gesture resolver and turns its
//! output into viewer messages. Hit testing casts a ray from the orbital
//! camera against the `HitArea` of every visible `Selectable`.

use bevy::prelude::*;

use crate::bevy::systems::hierarchy::{TransformTree, world_transform};
use crate::bevy::{
    CameraInput, DragEnded, DragStarted, EntityClicked, HitArea, HoverChanged, MainCamera,
    OrbitCamera, PointerInteraction, PointerSample, PointerSampleKind, Selectable, ViewportState,
};
use crate::camera::{CameraController, FIELD_OF_VIEW};
use crate::interaction::{HitTester, InteractionEvent};
use crate::raycast::{HitCandidate, nearest_hit, pick_ray, to_ndc};
use crate::resize::ViewportSize;

type Pickables<'w, 's> =
    Query<'w, 's, (Entity, &'static Selectable, &'static HitArea, &'static Visibility)>;

/// Id of the nearest visible selectable under `pointer`.
fn pick_entity(
    camera: &CameraController,
    viewport: ViewportSize,
    pointer: Vec2,
    pickables: &Pickables,
    tree: &TransformTree,
) -> Option<String> {
    #[allow(clippy::cast_precision_loss)]
    let surface = Vec2::new(viewport.width as f32, viewport.height as f32);
    let ndc = to_ndc(pointer, surface)?;
    let ray = pick_ray(&camera.transform(), FIELD_OF_VIEW, viewport.aspect(), ndc)?;

    let candidates: Vec<HitCandidate> = pickables
        .iter()
        .map(|(entity, selectable, area, visibility)| HitCandidate {
            id: &selectable.id,
            shape: &area.0,
            world: world_transform(entity, tree),
            visible: *visibility != Visibility::Hidden,
        })
        .collect();
    nearest_hit(&ray, candidates).map(|(id, _)| id.to_string())
}

/// A move directly followed by another move in the same frame; only the
/// last of such a run is hover-tested.
fn superseded_move(samples: &[PointerSample], index: usize) -> bool {
    samples[index].kind == PointerSampleKind::Move
        && samples
            .get(index + 1)
            .is_some_and(|next| next.kind == PointerSampleKind::Move)
}

/// System to resolve this frame's pointer samples into viewer messages.
#[allow(clippy::too_many_arguments)]
pub fn resolve_pointer_samples(
    mut samples: MessageReader<PointerSample>,
    mut interaction: ResMut<PointerInteraction>,
    viewport: Res<ViewportState>,
    cameras: Query<&OrbitCamera, With<MainCamera>>,
    pickables: Pickables,
    tree: TransformTree,
    mut clicked: MessageWriter<EntityClicked>,
    mut drag_started: MessageWriter<DragStarted>,
    mut drag_ended: MessageWriter<DragEnded>,
    mut hover: MessageWriter<HoverChanged>,
    mut camera_input: MessageWriter<CameraInput>,
) {
    if samples.is_empty() {
        return;
    }

    let camera = cameras.single().ok();
    let pick = |pointer: Vec2| {
        camera.and_then(|camera| {
            pick_entity(&camera.controller, viewport.size, pointer, &pickables, &tree)
        })
    };
    // Without a camera there is nothing to test against.
    let tester: Option<&dyn HitTester> = camera.is_some().then_some(&pick as &dyn HitTester);

    let samples: Vec<PointerSample> = samples.read().copied().collect();
    let resolver = &mut interaction.resolver;
    for (index, sample) in samples.iter().enumerate() {
        let position = sample.position;
        let event = match sample.kind {
            PointerSampleKind::Down => Some(resolver.pointer_down(position, sample.time_ms)),
            PointerSampleKind::Move if superseded_move(&samples, index) => {
                resolver.track_move(position)
            }
            PointerSampleKind::Move => resolver.pointer_move(position, tester),
            PointerSampleKind::Up => resolver.pointer_up(),
            PointerSampleKind::Click => resolver.click(position, sample.time_ms, tester),
            PointerSampleKind::Leave => resolver.pointer_leave(),
            PointerSampleKind::Wheel { delta_y } => Some(resolver.wheel(delta_y)),
            PointerSampleKind::Pinch { spread } => resolver.pinch(spread),
            PointerSampleKind::PinchEnd => {
                resolver.end_pinch();
                None
            }
        };

        match event {
            Some(InteractionEvent::DragStart) => {
                drag_started.write(DragStarted);
            }
            Some(InteractionEvent::DragEnd) => {
                drag_ended.write(DragEnded);
            }
            Some(InteractionEvent::Rotate { dx, dy }) => {
                camera_input.write(CameraInput::Rotate { dx, dy });
            }
            Some(InteractionEvent::Zoom { delta }) => {
                camera_input.write(CameraInput::Zoom { delta });
            }
            Some(InteractionEvent::Select { id, is_double }) => {
                tracing::info!("[viewer] clicked {} (double: {})", id, is_double);
                clicked.write(EntityClicked { id, is_double });
            }
            Some(InteractionEvent::Hover { id }) => {
                hover.write(HoverChanged { id });
            }
            None => {}
        }
    }
}
