//! Page-side view state.
//!
//! Pages keep the authoritative copy of the viewer's runtime configuration
//! and push it as a full patch whenever it changes. Camera requests are
//! counters: bumping one asks the viewer to act once.

use std::rc::Rc;

use astrogeo_core::LayerFlags;
use astrogeo_core::animation::clamp_speed;
use astrogeo_core::bevy::ViewerConfigPatch;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub selected: Option<String>,
    pub paused: bool,
    pub speed: f32,
    pub layers: LayerFlags,
    pub decomposed: bool,
    pub show_orbits: bool,
    /// Mirrors the document's fullscreen state; not sent to the viewer.
    pub fullscreen: bool,
    pub reset_tick: u32,
    pub general_view_tick: u32,
    pub follow_tick: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected: None,
            paused: false,
            speed: 1.0,
            layers: LayerFlags::default(),
            decomposed: false,
            show_orbits: true,
            fullscreen: false,
            reset_tick: 0,
            general_view_tick: 0,
            follow_tick: 0,
        }
    }
}

impl ViewState {
    pub fn with_layers(layers: LayerFlags) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    /// Every field, so the viewer ends up in exactly this state.
    pub fn to_patch(&self) -> ViewerConfigPatch {
        ViewerConfigPatch {
            selected: Some(self.selected.clone()),
            paused: Some(self.paused),
            speed: Some(self.speed),
            show_faces: Some(self.layers.faces),
            show_edges: Some(self.layers.edges),
            show_vertices: Some(self.layers.vertices),
            decomposed: Some(self.decomposed),
            show_orbits: Some(self.show_orbits),
            reset_tick: Some(self.reset_tick),
            general_view_tick: Some(self.general_view_tick),
            follow_tick: Some(self.follow_tick),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ViewAction {
    Select(Option<String>),
    /// Select and ask the camera to follow (double click).
    SelectAndFollow(String),
    TogglePause,
    SetSpeed(f32),
    ToggleFaces,
    ToggleEdges,
    ToggleVertices,
    ToggleDecomposed,
    ToggleOrbits,
    ResetView,
    GeneralView,
    FullscreenChanged(bool),
    /// New solid: drop decomposition and selection, keep layers.
    SolidChanged,
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::Select(id) => next.selected = id,
            ViewAction::SelectAndFollow(id) => {
                next.selected = Some(id);
                next.follow_tick = next.follow_tick.wrapping_add(1);
            }
            ViewAction::TogglePause => next.paused = !next.paused,
            ViewAction::SetSpeed(speed) => next.speed = clamp_speed(speed),
            ViewAction::ToggleFaces => next.layers.faces = !next.layers.faces,
            ViewAction::ToggleEdges => next.layers.edges = !next.layers.edges,
            ViewAction::ToggleVertices => next.layers.vertices = !next.layers.vertices,
            ViewAction::ToggleDecomposed => next.decomposed = !next.decomposed,
            ViewAction::ToggleOrbits => next.show_orbits = !next.show_orbits,
            ViewAction::FullscreenChanged(fullscreen) => next.fullscreen = fullscreen,
            ViewAction::ResetView => next.reset_tick = next.reset_tick.wrapping_add(1),
            ViewAction::GeneralView => {
                next.general_view_tick = next.general_view_tick.wrapping_add(1);
            }
            ViewAction::SolidChanged => {
                next.selected = None;
                next.decomposed = false;
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    fn reduce(state: ViewState, action: ViewAction) -> ViewState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[wasm_bindgen_test]
    fn ticks_only_count_up() {
        let state = reduce(ViewState::default(), ViewAction::ResetView);
        let state = reduce(state, ViewAction::ResetView);
        let state = reduce(state, ViewAction::GeneralView);
        assert_eq!(state.reset_tick, 2);
        assert_eq!(state.general_view_tick, 1);
        assert_eq!(state.follow_tick, 0);
    }

    #[wasm_bindgen_test]
    fn double_click_selects_and_follows() {
        let state = reduce(ViewState::default(), ViewAction::SelectAndFollow("marte".into()));
        assert_eq!(state.selected.as_deref(), Some("marte"));
        assert_eq!(state.follow_tick, 1);
        assert_eq!(state.to_patch().follow_tick, Some(1));
    }

    #[wasm_bindgen_test]
    fn patch_carries_deselection() {
        let state = reduce(ViewState::default(), ViewAction::Select(None));
        assert_eq!(state.to_patch().selected, Some(None));
    }

    #[wasm_bindgen_test]
    fn speed_is_clamped() {
        let state = reduce(ViewState::default(), ViewAction::SetSpeed(9.0));
        assert!((state.speed - 5.0).abs() < 1e-6);
    }

    #[wasm_bindgen_test]
    fn solid_change_keeps_layers() {
        let mut state = ViewState::default();
        state.layers.edges = true;
        state.decomposed = true;
        let state = reduce(state, ViewAction::SolidChanged);
        assert!(state.layers.edges);
        assert!(!state.decomposed);
    }

    #[wasm_bindgen_test]
    fn fullscreen_follows_the_document_without_touching_the_patch() {
        let before = ViewState::default();
        let state = reduce(before.clone(), ViewAction::FullscreenChanged(true));
        assert!(state.fullscreen);
        assert_eq!(state.to_patch(), before.to_patch());

        let state = reduce(state, ViewAction::FullscreenChanged(false));
        assert!(!state.fullscreen);
    }
}
