//! Headless scenario tests for the viewer plugin.

use bevy::prelude::*;

use crate::animation::{
    BASE_FOCUS_DISTANCE, FOLLOW_FRAMES, SOLID_SPIN_SPEED, advance_angle, revolution_step,
    spin_step,
};
use crate::bevy::test_utils::TestApp;
use crate::bevy::{
    CelestialBody, FaceFragment, FollowState, LayerRole, MainCamera, OrbitCamera, OrbitGroup,
    PointerSampleKind, SolidRoot, Spin, ViewMode, ViewerCommand, ViewerConfigPatch, ViewerEvent,
    ViewerMode, ViewportState,
};
use crate::camera::{CameraController, CameraPreset};
use crate::config::SolidsConfig;

fn layers(app: &mut TestApp) -> Vec<(LayerRole, Visibility)> {
    let world = app.world_mut();
    world
        .query::<(&LayerRole, &Visibility)>()
        .iter(world)
        .map(|(role, visibility)| (*role, *visibility))
        .collect()
}

fn all_with(layers: &[(LayerRole, Visibility)], role: LayerRole) -> Vec<Visibility> {
    layers
        .iter()
        .filter(|(r, _)| *r == role)
        .map(|(_, v)| *v)
        .collect()
}

fn shown(visibilities: &[Visibility]) -> bool {
    !visibilities.is_empty() && visibilities.iter().all(|v| *v != Visibility::Hidden)
}

fn hidden(visibilities: &[Visibility]) -> bool {
    !visibilities.is_empty() && visibilities.iter().all(|v| *v == Visibility::Hidden)
}

fn camera(app: &mut TestApp) -> CameraController {
    let cameras = app.collect::<OrbitCamera>();
    assert_eq!(cameras.len(), 1, "exactly one camera");
    cameras[0].controller.clone()
}

fn clicks(app: &TestApp) -> Vec<(String, bool)> {
    app.stores
        .events
        .drain()
        .into_iter()
        .filter_map(|event| match event {
            ViewerEvent::EntityClicked { id, is_double } => Some((id, is_double)),
            _ => None,
        })
        .collect()
}

fn center(app: &TestApp) -> Vec2 {
    let size = app.world().resource::<ViewportState>().size;
    #[allow(clippy::cast_precision_loss)]
    Vec2::new(size.width as f32 / 2.0, size.height as f32 / 2.0)
}

// ============================================================================
// Solids
// ============================================================================

#[test]
fn entering_solids_builds_the_scene() {
    let mut app = TestApp::new();
    assert_eq!(app.mode(), ViewerMode::Idle);
    app.enter_solids(SolidsConfig::default());

    assert_eq!(app.mode(), ViewerMode::Solids);
    assert_eq!(app.collect::<SolidRoot>().len(), 1);
    // A cube is 12 triangles.
    assert_eq!(app.collect::<FaceFragment>().len(), 12);
    assert_eq!(camera(&mut app).preset(), CameraPreset::SOLIDS);
    assert_eq!(app.stores.view.get_summary().mode, ViewMode::Solids);
}

#[test]
fn solid_spins_one_step_per_frame() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());

    let before = app.collect::<Spin>()[0].angle;
    app.update();
    let after = app.collect::<Spin>()[0].angle;
    assert!((after - before - SOLID_SPIN_SPEED).abs() < 1e-6);
}

#[test]
fn toggling_edges_only_changes_the_wireframe() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());

    let before = layers(&mut app);
    assert!(hidden(&all_with(&before, LayerRole::Edges)));

    app.set_config(ViewerConfigPatch {
        show_edges: Some(true),
        ..Default::default()
    });
    let after = layers(&mut app);

    assert!(shown(&all_with(&after, LayerRole::Edges)));
    for role in [LayerRole::WholeSolid, LayerRole::Fragment, LayerRole::Vertices] {
        assert_eq!(all_with(&before, role), all_with(&after, role), "{role:?} changed");
    }
}

#[test]
fn decomposition_is_exclusive_with_the_whole_solid() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());
    app.set_config(ViewerConfigPatch {
        show_edges: Some(true),
        show_vertices: Some(true),
        ..Default::default()
    });

    for decomposed in [true, false, true] {
        app.set_config(ViewerConfigPatch {
            decomposed: Some(decomposed),
            ..Default::default()
        });
        let current = layers(&mut app);
        let whole = all_with(&current, LayerRole::WholeSolid);
        let fragments = all_with(&current, LayerRole::Fragment);
        if decomposed {
            assert!(hidden(&whole) && shown(&fragments));
            assert!(hidden(&all_with(&current, LayerRole::Edges)));
            assert!(hidden(&all_with(&current, LayerRole::Vertices)));
        } else {
            assert!(shown(&whole) && hidden(&fragments));
            assert!(shown(&all_with(&current, LayerRole::Edges)));
        }
    }
}

#[test]
fn decomposed_fragments_move_out_and_the_solid_holds_still() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());
    app.set_config(ViewerConfigPatch {
        decomposed: Some(true),
        ..Default::default()
    });

    let world = app.world_mut();
    for (fragment, transform) in world.query::<(&FaceFragment, &Transform)>().iter(world) {
        assert_eq!(*transform, fragment.exploded_transform());
    }

    let before = app.collect::<Spin>()[0].angle;
    app.update_n(3);
    assert_eq!(app.collect::<Spin>()[0].angle, before);
}

#[test]
fn tap_on_the_solid_selects_it_and_a_quick_second_tap_is_double() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());
    app.stores.events.drain();
    let at = center(&app);

    app.pointer(PointerSampleKind::Down, at, 0.0);
    app.pointer(PointerSampleKind::Up, at, 100.0);
    app.pointer(PointerSampleKind::Click, at, 100.0);
    app.update();
    assert_eq!(clicks(&app), vec![("cubo".to_string(), false)]);

    app.pointer(PointerSampleKind::Down, at, 300.0);
    app.pointer(PointerSampleKind::Up, at, 400.0);
    app.pointer(PointerSampleKind::Click, at, 400.0);
    app.update();
    assert_eq!(clicks(&app), vec![("cubo".to_string(), true)]);
}

#[test]
fn tap_on_empty_space_selects_nothing() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());
    app.stores.events.drain();

    let corner = Vec2::new(5.0, 5.0);
    app.pointer(PointerSampleKind::Down, corner, 0.0);
    app.pointer(PointerSampleKind::Up, corner, 50.0);
    app.pointer(PointerSampleKind::Click, corner, 50.0);
    app.update();
    assert!(clicks(&app).is_empty());
}

#[test]
fn drag_rotates_and_reset_tick_restores_the_default_view() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());

    app.pointer(PointerSampleKind::Down, Vec2::new(100.0, 100.0), 0.0);
    app.pointer(PointerSampleKind::Move, Vec2::new(150.0, 120.0), 16.0);
    app.pointer(PointerSampleKind::Up, Vec2::new(150.0, 120.0), 32.0);
    app.update();

    let dragged = camera(&mut app).state();
    assert!((dragged.rotation_y - 0.5).abs() < 1e-5);
    assert!((dragged.rotation_x - 0.2).abs() < 1e-5);

    app.set_config(ViewerConfigPatch {
        reset_tick: Some(1),
        ..Default::default()
    });
    let controller = camera(&mut app);
    assert_eq!(controller.state(), CameraController::new(CameraPreset::SOLIDS).state());

    let world = app.world_mut();
    let transform = *world
        .query_filtered::<&Transform, With<MainCamera>>()
        .single(world)
        .unwrap();
    assert_eq!(transform, controller.transform());
}

#[test]
fn wheel_zoom_stays_within_the_preset() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());

    for _ in 0..20 {
        app.pointer(PointerSampleKind::Wheel { delta_y: 500.0 }, Vec2::ZERO, 0.0);
    }
    app.update();
    assert_eq!(camera(&mut app).state().distance, CameraPreset::SOLIDS.max_distance);
}

// ============================================================================
// Solar system
// ============================================================================

#[test]
fn entering_solar_builds_sun_and_planets() {
    let mut app = TestApp::new();
    app.enter_solar();

    assert_eq!(app.mode(), ViewerMode::Solar);
    assert_eq!(app.collect::<CelestialBody>().len(), 9);
    assert_eq!(app.collect::<OrbitGroup>().len(), 8);
    assert_eq!(camera(&mut app).preset(), CameraPreset::SOLAR);
}

#[test]
fn pause_freezes_orbits_and_spins_and_resume_advances_them() {
    let mut app = TestApp::new();
    app.enter_solar();
    app.set_config(ViewerConfigPatch {
        paused: Some(true),
        ..Default::default()
    });

    let frozen = app.collect::<OrbitGroup>();
    let frozen_spins = app.collect::<Spin>();
    assert_eq!(frozen_spins.len(), 9);
    app.update_n(5);
    let still = app.collect::<OrbitGroup>();
    let still_spins = app.collect::<Spin>();
    for (a, b) in frozen.iter().zip(&still) {
        assert_eq!(a.angle, b.angle);
    }
    for (a, b) in frozen_spins.iter().zip(&still_spins) {
        assert_eq!(a.angle, b.angle);
    }

    app.set_config(ViewerConfigPatch {
        paused: Some(false),
        speed: Some(2.0),
        ..Default::default()
    });
    let moved = app.collect::<OrbitGroup>();
    for (a, b) in still.iter().zip(&moved) {
        let expected = advance_angle(a.angle, revolution_step(a.orbital_speed, 2.0));
        assert!((b.angle - expected).abs() < 1e-6);
    }
    let spun = app.collect::<Spin>();
    for (a, b) in still_spins.iter().zip(&spun) {
        let expected = advance_angle(a.angle, spin_step(a.speed, 2.0));
        assert!((b.angle - expected).abs() < 1e-6);
    }
}

#[test]
fn selecting_a_planet_follows_it_at_its_focus_distance() {
    let mut app = TestApp::new();
    app.enter_solar();

    app.set_config(ViewerConfigPatch {
        selected: Some(Some("tierra".into())),
        ..Default::default()
    });
    let follow = app.world().resource::<FollowState>().clone();
    assert_eq!(follow.target.as_deref(), Some("tierra"));
    assert_eq!(follow.distance, BASE_FOCUS_DISTANCE);
    assert!(app.stores.view.get_summary().following);

    app.update_n(FOLLOW_FRAMES as usize);
    assert!(!app.world().resource::<FollowState>().is_active());
    assert!((camera(&mut app).state().distance - BASE_FOCUS_DISTANCE).abs() < 0.01);

    app.set_config(ViewerConfigPatch {
        selected: Some(Some("neptuno".into())),
        ..Default::default()
    });
    assert_eq!(app.world().resource::<FollowState>().distance, 8.0);
}

#[test]
fn clearing_the_selection_stops_following() {
    let mut app = TestApp::new();
    app.enter_solar();
    app.set_config(ViewerConfigPatch {
        selected: Some(Some("marte".into())),
        ..Default::default()
    });
    assert!(app.world().resource::<FollowState>().is_active());

    app.set_config(ViewerConfigPatch {
        selected: Some(None),
        ..Default::default()
    });
    assert!(!app.world().resource::<FollowState>().is_active());
}

#[test]
fn follow_tick_refollows_the_current_selection() {
    let mut app = TestApp::new();
    app.enter_solar();
    app.set_config(ViewerConfigPatch {
        selected: Some(Some("jupiter".into())),
        general_view_tick: Some(1),
        ..Default::default()
    });
    // Ticks fire before the selection is examined, so the selection wins.
    assert!(app.world().resource::<FollowState>().is_active());

    app.set_config(ViewerConfigPatch {
        general_view_tick: Some(2),
        ..Default::default()
    });
    assert!(!app.world().resource::<FollowState>().is_active());
    assert_eq!(
        camera(&mut app).state().distance,
        CameraPreset::SOLAR.general_view_distance
    );

    app.set_config(ViewerConfigPatch {
        follow_tick: Some(1),
        ..Default::default()
    });
    let follow = app.world().resource::<FollowState>();
    assert_eq!(follow.target.as_deref(), Some("jupiter"));
}

#[test]
fn switching_modes_replaces_the_scene_and_keeps_one_camera() {
    let mut app = TestApp::new();
    app.enter_solids(SolidsConfig::default());
    assert_eq!(app.collect::<SolidRoot>().len(), 1);

    app.enter_solar();
    assert_eq!(app.collect::<SolidRoot>().len(), 0);
    assert_eq!(app.collect::<FaceFragment>().len(), 0);
    assert_eq!(app.collect::<CelestialBody>().len(), 9);
    assert_eq!(camera(&mut app).preset(), CameraPreset::SOLAR);

    app.push_command(ViewerCommand::ClearMode);
    app.update_n(2);
    assert_eq!(app.mode(), ViewerMode::Idle);
    assert_eq!(app.collect::<CelestialBody>().len(), 0);
    assert_eq!(app.stores.view.get_summary().mode, ViewMode::Idle);
}

#[test]
fn resize_updates_the_viewport_and_ignores_empty_sizes() {
    let mut app = TestApp::new();
    app.push_command(ViewerCommand::Resize {
        width: 800,
        height: 600,
    });
    app.update();
    let size = app.world().resource::<ViewportState>().size;
    assert_eq!((size.width, size.height), (800, 600));

    app.push_command(ViewerCommand::Resize {
        width: 0,
        height: 600,
    });
    app.update();
    let size = app.world().resource::<ViewportState>().size;
    assert_eq!((size.width, size.height), (800, 600));
}
