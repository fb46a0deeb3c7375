//! WASM entry points for the viewer.
//!
//! Provides JavaScript-callable functions to start the Bevy app, switch
//! visualizations, push configuration and poll the shared stores.

use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use parking_lot::Mutex;
use wasm_bindgen::prelude::*;

use crate::bevy::{
    CommandQueue, StateStores, ViewerCommand, ViewerConfigPatch, ViewerUnifiedPlugin,
};
use crate::config::{SolarSystemConfig, SolidsConfig};
use crate::error::CommandError;

// ============================================================================
// Global State
// ============================================================================

/// Flag for signaling app shutdown (checked every frame by a Bevy system).
static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);

/// Whether the Bevy App has been started.
/// In WASM the EventLoop can only be created once, so page navigations
/// reuse the running app and only switch modes.
static BEVY_APP_STARTED: AtomicBool = AtomicBool::new(false);

/// Global state that can be reset on page reload.
struct GlobalState {
    command_queue: CommandQueue,
    state_stores: StateStores,
}

impl GlobalState {
    fn new() -> Self {
        Self {
            command_queue: CommandQueue::new(),
            state_stores: StateStores::new(),
        }
    }
}

static GLOBAL_STATE: Mutex<Option<GlobalState>> = Mutex::new(None);

fn with_global_state<R>(f: impl FnOnce(&GlobalState) -> R) -> R {
    let mut guard = GLOBAL_STATE.lock();
    f(guard.get_or_insert_with(GlobalState::new))
}

fn get_command_queue() -> CommandQueue {
    with_global_state(|state| state.command_queue.clone())
}

fn get_state_stores() -> StateStores {
    with_global_state(|state| state.state_stores.clone())
}

fn to_js(error: CommandError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn ensure_running() -> Result<(), JsValue> {
    if SHOULD_EXIT.load(Ordering::SeqCst) {
        return Err(to_js(CommandError::ShuttingDown));
    }
    Ok(())
}

/// Request the Bevy app to exit. Called before page unload.
/// The app exits on the next frame when `check_exit_system` runs.
#[wasm_bindgen]
pub fn request_viewer_exit() {
    tracing::info!("[viewer] request_viewer_exit called");
    SHOULD_EXIT.store(true, Ordering::SeqCst);
}

/// Reset global state. Called after the app exits or before page unload.
#[wasm_bindgen]
pub fn reset_viewer_state() {
    tracing::info!("[viewer] reset_viewer_state called");
    SHOULD_EXIT.store(true, Ordering::SeqCst);

    let mut guard = GLOBAL_STATE.lock();
    if let Some(state) = guard.as_ref() {
        state.command_queue.clear();
    }
    *guard = None;

    SHOULD_EXIT.store(false, Ordering::SeqCst);
}

/// Bevy system that sends `AppExit` once an exit was requested.
pub fn check_exit_system(mut exit: MessageWriter<AppExit>) {
    if SHOULD_EXIT.load(Ordering::SeqCst) {
        tracing::info!("[viewer] check_exit_system: sending AppExit");
        exit.write(AppExit::Success);
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Starts the unified Bevy app in Idle mode on the given canvas.
///
/// Use `init_solids_mode()` or `init_solar_mode()` to pick a visualization.
#[wasm_bindgen]
pub fn start_viewer_app(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if BEVY_APP_STARTED.load(Ordering::SeqCst) {
        tracing::info!("[viewer] app already running, skipping creation");
        return Ok(());
    }

    let command_queue = get_command_queue();
    let state_stores = get_state_stores();

    tracing::info!("[viewer] creating Bevy app for canvas: #{}", canvas_id);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    canvas: Some(format!("#{canvas_id}")),
                    // Sized by resize commands from the host page.
                    fit_canvas_to_parent: false,
                    prevent_default_event_handling: true,
                    ..default()
                }),
                ..default()
            })
            .disable::<bevy::log::LogPlugin>(),
    );
    app.insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::Continuous,
    });
    app.add_plugins(ViewerUnifiedPlugin::new(command_queue, state_stores));

    BEVY_APP_STARTED.store(true, Ordering::SeqCst);

    tracing::info!("[viewer] calling app.run()");
    app.run();
    tracing::info!("[viewer] app.run() returned");

    Ok(())
}

/// Queues a full mode switch: ClearMode → Yield → `init`.
fn switch_mode(init: ViewerCommand) {
    let queue = get_command_queue();
    get_state_stores().reset_for_new_view();
    queue.push(ViewerCommand::ClearMode);
    queue.push(ViewerCommand::Yield);
    queue.push(init);
}

/// Shows the geometric solids view. An empty string uses the defaults.
#[wasm_bindgen]
pub fn init_solids_mode(config_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let config = if config_json.trim().is_empty() {
        SolidsConfig::default()
    } else {
        SolidsConfig::from_json(config_json).map_err(|e| to_js(e.into()))?
    };
    tracing::info!("[viewer] init_solids_mode: {}", config.kind().id());
    switch_mode(ViewerCommand::InitSolids { config });
    Ok(())
}

/// Shows the solar system view. An empty string uses the defaults.
#[wasm_bindgen]
pub fn init_solar_mode(config_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let config = if config_json.trim().is_empty() {
        SolarSystemConfig::default()
    } else {
        SolarSystemConfig::from_json(config_json).map_err(|e| to_js(e.into()))?
    };
    tracing::info!("[viewer] init_solar_mode: {} planets", config.planets().count());
    switch_mode(ViewerCommand::InitSolar { config });
    Ok(())
}

/// Tears the current scene down, leaving the app idle.
#[wasm_bindgen]
pub fn clear_viewer_mode() -> Result<(), JsValue> {
    ensure_running()?;
    get_command_queue().push(ViewerCommand::ClearMode);
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

#[wasm_bindgen]
pub fn is_viewer_app_running() -> bool {
    BEVY_APP_STARTED.load(Ordering::SeqCst) && !SHOULD_EXIT.load(Ordering::SeqCst)
}

/// Sends a raw JSON command.
#[wasm_bindgen]
pub fn send_command(command_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let command = ViewerCommand::from_json(command_json).map_err(to_js)?;
    get_command_queue().push(command);
    Ok(())
}

/// Applies a partial view configuration (selection, pause, speed, layers, ticks).
#[wasm_bindgen]
pub fn set_viewer_config(patch_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let patch: ViewerConfigPatch =
        serde_json::from_str(patch_json).map_err(|e| to_js(e.into()))?;
    get_command_queue().push(ViewerCommand::SetConfig { patch });
    Ok(())
}

/// Sets the drawing surface size in CSS pixels.
#[wasm_bindgen]
pub fn resize_viewer(width: u32, height: u32) -> Result<(), JsValue> {
    ensure_running()?;
    get_command_queue().push(ViewerCommand::Resize { width, height });
    Ok(())
}

// ============================================================================
// State Queries
// ============================================================================

/// Takes every pending viewer event as an array of tagged objects.
#[wasm_bindgen]
pub fn drain_viewer_events() -> JsValue {
    let events = get_state_stores().events.drain();
    serde_wasm_bindgen::to_value(&events).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_viewer_events_version() -> u64 {
    get_state_stores().events.get_version()
}

#[wasm_bindgen]
pub fn get_view_summary() -> JsValue {
    let summary = get_state_stores().view.get_summary();
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_view_version() -> u64 {
    get_state_stores().view.get_version()
}
