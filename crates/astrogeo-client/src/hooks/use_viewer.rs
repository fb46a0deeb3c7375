//! Viewer integration hooks for Yew.
//!
//! The provider owns the canvas and starts the Bevy app once. Polling hooks
//! read the shared state stores and re-render only when a store's version
//! changes.

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

// Direct calls into the astrogeo-core wasm entry points.
pub use astrogeo_core::bevy::{
    ViewSummary, ViewerConfigPatch, ViewerEvent, clear_viewer_mode, drain_viewer_events,
    get_view_summary, get_view_version, get_viewer_events_version, init_solar_mode,
    init_solids_mode, is_viewer_app_running, request_viewer_exit, reset_viewer_state,
    resize_viewer, set_viewer_config, start_viewer_app,
};
use astrogeo_core::{SolarSystemConfig, SolidsConfig};

pub const VIEWER_CANVAS_ID: &str = "viewer-canvas";

/// Polling interval in milliseconds.
const POLL_INTERVAL_MS: u32 = 50;

/// Delay before starting Bevy so the canvas is mounted.
const START_DELAY_MS: u32 = 100;

// ============================================================================
// Context
// ============================================================================

/// What a page wants the viewer to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerInit {
    Solids(SolidsConfig),
    Solar(SolarSystemConfig),
}

/// Shared handle for sending commands to the viewer.
#[derive(Clone, PartialEq)]
pub struct ViewerContext {
    /// Whether the Bevy app has been started.
    pub initialized: bool,
}

impl ViewerContext {
    fn ensure_initialized(&self) -> Result<(), String> {
        if self.initialized {
            Ok(())
        } else {
            Err("viewer not initialized".to_string())
        }
    }

    /// Switches the viewer to the given visualization.
    pub fn init(&self, init: &ViewerInit) -> Result<(), String> {
        self.ensure_initialized()?;
        let result = match init {
            ViewerInit::Solids(config) => {
                let json = serde_json::to_string(config).map_err(|e| e.to_string())?;
                init_solids_mode(&json)
            }
            ViewerInit::Solar(config) => {
                let json = serde_json::to_string(config).map_err(|e| e.to_string())?;
                init_solar_mode(&json)
            }
        };
        result.map_err(|e| format!("{e:?}"))
    }

    pub fn clear(&self) -> Result<(), String> {
        self.ensure_initialized()?;
        clear_viewer_mode().map_err(|e| format!("{e:?}"))
    }

    pub fn set_config(&self, patch: &ViewerConfigPatch) -> Result<(), String> {
        self.ensure_initialized()?;
        let json = serde_json::to_string(patch).map_err(|e| e.to_string())?;
        set_viewer_config(&json).map_err(|e| format!("{e:?}"))
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewerProviderProps {
    pub children: Children,
    /// Canvas element ID.
    pub canvas_id: AttrValue,
}

/// Provider component that starts the Bevy app in Idle mode.
///
/// Pages switch modes through `ViewerHost`. The app outlives page
/// navigations; only a page unload shuts it down.
#[function_component(ViewerProvider)]
pub fn viewer_provider(props: &ViewerProviderProps) -> Html {
    let initialized = use_state(is_viewer_app_running);

    {
        let initialized = initialized.clone();
        let canvas_id = props.canvas_id.clone();

        use_effect_with((), move |_| {
            let unload = EventListener::new(&gloo::utils::window(), "beforeunload", |_| {
                tracing::info!("beforeunload: requesting viewer exit and cleaning up state");
                request_viewer_exit();
                reset_viewer_state();
            });

            let timeout = Timeout::new(START_DELAY_MS, move || {
                initialized.set(true);
                tracing::info!("Viewer initializing on #{}", canvas_id);
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = start_viewer_app(&canvas_id) {
                        tracing::error!("Failed to start viewer: {:?}", e);
                    }
                });
            });

            move || {
                tracing::info!("ViewerProvider unmounting");
                drop(timeout);
                drop(unload);
            }
        });
    }

    let context = ViewerContext {
        initialized: *initialized,
    };

    let canvas_style = "position: fixed; top: 0; left: 0; z-index: 0; touch-action: none;";

    html! {
        <ContextProvider<ViewerContext> context={context}>
            <canvas
                id={props.canvas_id.clone()}
                class="viewer-canvas"
                style={canvas_style}
            />
            { props.children.clone() }
        </ContextProvider<ViewerContext>>
    }
}

#[hook]
pub fn use_viewer() -> ViewerContext {
    use_context::<ViewerContext>().unwrap_or(ViewerContext { initialized: false })
}

// ============================================================================
// Polling Hooks
// ============================================================================

/// Hook to get the view summary (mode, selection, camera).
#[hook]
pub fn use_view_summary() -> ViewSummary {
    let state = use_state(ViewSummary::default);
    let last_version = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(POLL_INTERVAL_MS, move || {
                let version = get_view_version();
                if version != *last_version.borrow() {
                    *last_version.borrow_mut() = version;
                    let js_value = get_view_summary();
                    if let Ok(summary) = serde_wasm_bindgen::from_value::<ViewSummary>(js_value) {
                        state.set(summary);
                    }
                }
            });

            move || drop(interval)
        });
    }

    (*state).clone()
}

/// Optional callbacks for viewer events; missing ones are no-ops.
#[derive(Clone, Default, PartialEq)]
pub struct ViewerEventHandlers {
    /// `(id, is_double)` for a resolved click on a selectable entity.
    pub on_entity_clicked: Option<Callback<(String, bool)>>,
    pub on_drag_start: Option<Callback<()>>,
    pub on_drag_end: Option<Callback<()>>,
    pub on_hover: Option<Callback<Option<String>>>,
}

impl ViewerEventHandlers {
    fn dispatch(&self, event: ViewerEvent) {
        match event {
            ViewerEvent::EntityClicked { id, is_double } => {
                if let Some(cb) = &self.on_entity_clicked {
                    cb.emit((id, is_double));
                }
            }
            ViewerEvent::DragStart => {
                if let Some(cb) = &self.on_drag_start {
                    cb.emit(());
                }
            }
            ViewerEvent::DragEnd => {
                if let Some(cb) = &self.on_drag_end {
                    cb.emit(());
                }
            }
            ViewerEvent::Hover { id } => {
                if let Some(cb) = &self.on_hover {
                    cb.emit(id);
                }
            }
        }
    }
}

/// Drains viewer events and forwards them to the latest handlers.
#[hook]
pub fn use_viewer_events(handlers: ViewerEventHandlers) {
    let handlers_ref = use_mut_ref(ViewerEventHandlers::default);
    *handlers_ref.borrow_mut() = handlers;
    let last_version = use_mut_ref(|| 0u64);

    use_effect_with((), move |_| {
        let interval = Interval::new(POLL_INTERVAL_MS, move || {
            let version = get_viewer_events_version();
            if version == *last_version.borrow() {
                return;
            }
            *last_version.borrow_mut() = version;

            let js_value = drain_viewer_events();
            let Ok(events) = serde_wasm_bindgen::from_value::<Vec<ViewerEvent>>(js_value) else {
                return;
            };
            let handlers = handlers_ref.borrow().clone();
            for event in events {
                handlers.dispatch(event);
            }
        });

        move || drop(interval)
    });
}
