//! Bevy plugins for the viewer.
//!
//! Provides:
//! - `ViewerHeadlessPlugin`: Logic-only plugin (no rendering/window dependencies) for headless testing
//! - `ViewerUnifiedPlugin`: Full plugin including `ViewerHeadlessPlugin` + rendering systems

use bevy::prelude::*;

use crate::bevy::events::*;
use crate::bevy::resources::*;
use crate::bevy::state_store::StateStores;
use crate::bevy::systems;

/// Active visualization; switched by the host page through commands.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewerMode {
    #[default]
    Idle,
    Solids,
    Solar,
}

/// Run condition: any visualization is active.
pub fn in_viewer_mode(mode: Res<State<ViewerMode>>) -> bool {
    *mode.get() != ViewerMode::Idle
}

/// Per-frame logic, in execution order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    /// Command queue and frame context.
    Commands,
    /// Ticks, pointer input and camera requests.
    Input,
    /// Orbits, spins and camera follow.
    Animate,
    /// Camera transform and layer visibility.
    Present,
}

// ============================================================================
// Headless Plugin (logic only, no rendering/window dependencies)
// ============================================================================

/// Headless plugin containing all viewer logic without rendering or window dependencies.
///
/// Use this plugin in tests with `MinimalPlugins` to run ECS systems
/// without requiring a windowing or rendering backend. Pointer input is
/// injected as `PointerSample` messages.
#[derive(Default)]
pub struct ViewerHeadlessPlugin {
    pub command_queue: Option<CommandQueue>,
    pub state_stores: Option<StateStores>,
}

impl Plugin for ViewerHeadlessPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // States
        // ====================================================================
        app.init_state::<ViewerMode>();

        // ====================================================================
        // Resources
        // ====================================================================
        app.insert_resource(self.command_queue.clone().unwrap_or_default())
            .insert_resource(self.state_stores.clone().unwrap_or_default())
            .init_resource::<ViewerConfig>()
            .init_resource::<FrameContext>()
            .init_resource::<FollowState>()
            .init_resource::<ViewTicks>()
            .init_resource::<PointerInteraction>()
            .init_resource::<ViewportState>()
            .init_resource::<SceneSources>();

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<PointerSample>()
            .add_message::<EntityClicked>()
            .add_message::<DragStarted>()
            .add_message::<DragEnded>()
            .add_message::<HoverChanged>()
            .add_message::<CameraInput>();

        // ====================================================================
        // Per-frame systems
        // ====================================================================
        app.configure_sets(
            Update,
            (
                ViewerSet::Commands,
                ViewerSet::Input.run_if(in_viewer_mode),
                ViewerSet::Animate.run_if(in_viewer_mode),
                ViewerSet::Present.run_if(in_viewer_mode),
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (systems::process_commands, systems::refresh_frame_context)
                .chain()
                .in_set(ViewerSet::Commands),
        );
        app.add_systems(
            Update,
            (
                systems::apply_view_ticks,
                systems::resolve_pointer_samples,
                systems::apply_camera_input,
            )
                .chain()
                .in_set(ViewerSet::Input),
        );
        app.add_systems(
            Update,
            (
                systems::advance_orbits,
                systems::advance_spins,
                systems::follow_selected_body,
            )
                .chain()
                .in_set(ViewerSet::Animate),
        );
        app.add_systems(
            Update,
            (systems::apply_camera_transform, systems::apply_layer_visibility)
                .in_set(ViewerSet::Present),
        );

        // WASM exit system
        #[cfg(all(target_arch = "wasm32", feature = "windowed"))]
        app.add_systems(Update, crate::bevy::wasm_entry::check_exit_system);

        // State sync (always active)
        app.add_systems(
            PostUpdate,
            (systems::sync_viewer_events, systems::sync_view_summary).chain(),
        );

        // ====================================================================
        // Mode transitions
        // ====================================================================
        app.add_systems(
            OnEnter(ViewerMode::Solids),
            (
                systems::setup_solids_camera,
                systems::spawn_solids_scene,
                systems::reset_view_state,
            )
                .chain(),
        );
        app.add_systems(
            OnEnter(ViewerMode::Solar),
            (
                systems::setup_solar_camera,
                systems::spawn_solar_scene,
                systems::reset_view_state,
            )
                .chain(),
        );
        app.add_systems(OnExit(ViewerMode::Solids), systems::cleanup_scene);
        app.add_systems(OnExit(ViewerMode::Solar), systems::cleanup_scene);
    }
}

// ============================================================================
// Unified Plugin (headless + rendering)
// ============================================================================

/// Unified plugin for the browser build.
///
/// Includes `ViewerHeadlessPlugin` for all logic, plus the systems that
/// need `Window`, input devices, `Mesh3d`/`StandardMaterial` and `Gizmos`.
#[cfg(feature = "windowed")]
#[derive(Default)]
pub struct ViewerUnifiedPlugin {
    pub command_queue: Option<CommandQueue>,
    pub state_stores: Option<StateStores>,
}

#[cfg(feature = "windowed")]
impl ViewerUnifiedPlugin {
    pub fn new(command_queue: CommandQueue, state_stores: StateStores) -> Self {
        Self {
            command_queue: Some(command_queue),
            state_stores: Some(state_stores),
        }
    }
}

#[cfg(feature = "windowed")]
impl Plugin for ViewerUnifiedPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ViewerHeadlessPlugin {
            command_queue: self.command_queue.clone(),
            state_stores: self.state_stores.clone(),
        });

        app.insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.04)))
            .init_resource::<systems::OverlayStyle>();

        // Window input feeds the resolver before it runs.
        app.add_systems(
            Update,
            systems::collect_pointer_samples
                .before(ViewerSet::Input)
                .after(ViewerSet::Commands)
                .run_if(in_viewer_mode),
        );

        app.add_systems(Update, systems::apply_viewport_size.after(ViewerSet::Commands));

        // Render components for freshly spawned entities (always active so
        // the reused camera gets them on first spawn).
        app.add_systems(
            Update,
            (
                systems::attach_camera_render,
                systems::attach_visuals,
                systems::attach_scene_lights,
            )
                .after(ViewerSet::Present),
        );

        app.add_systems(
            Update,
            (
                systems::update_face_fill,
                systems::highlight_hovered,
                systems::draw_overlays,
            )
                .after(ViewerSet::Present)
                .run_if(in_viewer_mode),
        );
    }
}
