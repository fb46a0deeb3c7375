//! Solar system viewer page.

use astrogeo_core::SolarSystemConfig;
use astrogeo_core::content::{body_facts, narration_for_body};
use yew::prelude::*;

use crate::components::{BodyInfoPanel, BodyPicker, Layout, ViewControls, ViewerHost};
use crate::hooks::{
    KeyboardShortcutsConfig, ViewerEventHandlers, ViewerInit, use_keyboard_shortcuts,
    use_narration, use_view_summary, use_viewer, use_viewer_events,
};
use crate::state::{ViewAction, ViewState};
use crate::util::toggle_fullscreen;

#[function_component(SolarPage)]
pub fn solar_page() -> Html {
    let viewer = use_viewer();
    let narration = use_narration();
    let summary = use_view_summary();
    let state = use_reducer(ViewState::default);

    let config = use_memo((), |_| SolarSystemConfig::default());
    let init = use_memo((), {
        let config = config.clone();
        move |_| ViewerInit::Solar((*config).clone())
    });

    {
        use_effect_with(((*state).clone(), viewer.initialized), move |(state, _)| {
            if let Err(e) = viewer.set_config(&state.to_patch()) {
                tracing::debug!("SolarPage: config deferred: {}", e);
            }
        });
    }

    {
        let speak = narration.speak.clone();
        use_effect_with(state.selected.clone(), move |selected| {
            if let Some(text) = selected.as_deref().and_then(narration_for_body) {
                speak.emit(text);
            }
        });
    }

    {
        let dispatch = state.dispatcher();
        use_viewer_events(ViewerEventHandlers {
            on_entity_clicked: Some(Callback::from(move |(id, is_double): (String, bool)| {
                if is_double {
                    dispatch.dispatch(ViewAction::SelectAndFollow(id));
                } else {
                    dispatch.dispatch(ViewAction::Select(Some(id)));
                }
            })),
            ..Default::default()
        });
    }

    let dispatch = state.dispatcher();
    let on_key = |action: ViewAction| {
        let dispatch = dispatch.clone();
        Some(Callback::from(move |()| dispatch.dispatch(action.clone())))
    };
    use_keyboard_shortcuts(KeyboardShortcutsConfig {
        on_toggle_pause: on_key(ViewAction::TogglePause),
        on_reset_view: on_key(ViewAction::ResetView),
        on_general_view: on_key(ViewAction::GeneralView),
        on_fullscreen: Some(Callback::from(|()| toggle_fullscreen())),
        on_decompose: None,
        enabled: true,
    });

    let on_pick = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| dispatch.dispatch(ViewAction::Select(Some(id))))
    };
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.dispatch(ViewAction::Select(None)))
    };

    let hovered = summary
        .hovered
        .as_deref()
        .and_then(body_facts)
        .map(|body| body.name);

    let on_fullscreen_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |fullscreen: bool| {
            dispatch.dispatch(ViewAction::FullscreenChanged(fullscreen));
        })
    };

    html! {
        <Layout overlay={true}>
            <ViewerHost init={(*init).clone()} on_fullscreen_change={on_fullscreen_change} />
            <div class="page solar-page">
                <BodyPicker
                    config={(*config).clone()}
                    selected={state.selected.clone()}
                    on_select={on_pick}
                />
                <ViewControls
                    state={(*state).clone()}
                    dispatch={dispatch}
                    narration={narration}
                    solar={true}
                />
                if let Some(name) = hovered {
                    <div class="hover-label">{ name }</div>
                }
                if let Some(id) = state.selected.clone() {
                    <BodyInfoPanel id={id} following={summary.following} on_close={on_close} />
                }
            </div>
        </Layout>
    }
}
