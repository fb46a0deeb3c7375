//! Geometric solids viewer page.

use astrogeo_core::content::narration_for_solid;
use astrogeo_core::{SolidKind, SolidsConfig};
use yew::prelude::*;

use crate::components::{
    LayerToggles, Layout, SolidInfoPanel, SolidPicker, ViewControls, ViewerHost,
};
use crate::hooks::{
    KeyboardShortcutsConfig, ViewerEventHandlers, ViewerInit, use_keyboard_shortcuts,
    use_narration, use_viewer, use_viewer_events,
};
use crate::state::{ViewAction, ViewState};
use crate::util::toggle_fullscreen;

fn shortcut(
    dispatch: &UseReducerDispatcher<ViewState>,
    action: ViewAction,
) -> Option<Callback<()>> {
    let dispatch = dispatch.clone();
    Some(Callback::from(move |()| dispatch.dispatch(action.clone())))
}

#[function_component(SolidsPage)]
pub fn solids_page() -> Html {
    let viewer = use_viewer();
    let narration = use_narration();
    let solid = use_state(|| AttrValue::Static(SolidKind::Cube.id()));
    let state = use_reducer(ViewState::default);

    let init = use_memo((*solid).clone(), |solid| {
        ViewerInit::Solids(SolidsConfig {
            solid: solid.to_string(),
            ..SolidsConfig::default()
        })
    });

    // Init resets the viewer configuration; resend it after every solid
    // change.
    {
        use_effect_with(
            ((*state).clone(), viewer.initialized, (*solid).clone()),
            move |(state, _, _)| {
                if let Err(e) = viewer.set_config(&state.to_patch()) {
                    tracing::debug!("SolidsPage: config deferred: {}", e);
                }
            },
        );
    }

    {
        let dispatch = state.dispatcher();
        let speak = narration.speak.clone();
        let solid = solid.clone();
        use_viewer_events(ViewerEventHandlers {
            on_entity_clicked: Some(Callback::from(move |(_id, is_double): (String, bool)| {
                if is_double {
                    dispatch.dispatch(ViewAction::ToggleDecomposed);
                } else {
                    speak.emit(narration_for_solid(&solid));
                }
            })),
            ..Default::default()
        });
    }

    let dispatch = state.dispatcher();
    use_keyboard_shortcuts(KeyboardShortcutsConfig {
        on_toggle_pause: shortcut(&dispatch, ViewAction::TogglePause),
        on_reset_view: shortcut(&dispatch, ViewAction::ResetView),
        on_general_view: shortcut(&dispatch, ViewAction::GeneralView),
        on_fullscreen: Some(Callback::from(|()| toggle_fullscreen())),
        on_decompose: shortcut(&dispatch, ViewAction::ToggleDecomposed),
        enabled: true,
    });

    let on_select_solid = {
        let solid = solid.clone();
        let dispatch = dispatch.clone();
        let speak = narration.speak.clone();
        Callback::from(move |id: AttrValue| {
            if id != *solid {
                dispatch.dispatch(ViewAction::SolidChanged);
                speak.emit(narration_for_solid(&id));
                solid.set(id);
            }
        })
    };

    let on_fullscreen_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |fullscreen: bool| {
            dispatch.dispatch(ViewAction::FullscreenChanged(fullscreen));
        })
    };

    html! {
        <Layout overlay={true}>
            <ViewerHost init={(*init).clone()} on_fullscreen_change={on_fullscreen_change} />
            <div class="page solids-page">
                <SolidPicker selected={(*solid).clone()} on_select={on_select_solid} />
                <LayerToggles state={(*state).clone()} dispatch={dispatch.clone()} />
                <ViewControls state={(*state).clone()} dispatch={dispatch} narration={narration} />
                <SolidInfoPanel id={(*solid).clone()} />
            </div>
        </Layout>
    }
}
