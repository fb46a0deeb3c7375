//! Playback and camera controls shared by both viewers.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::hooks::NarrationHandle;
use crate::state::{ViewAction, ViewState};
use crate::util::toggle_fullscreen;

#[derive(Properties, PartialEq)]
pub struct ViewControlsProps {
    pub state: ViewState,
    pub dispatch: UseReducerDispatcher<ViewState>,
    pub narration: NarrationHandle,
    /// Speed slider and orbit toggle (solar view only).
    #[prop_or(false)]
    pub solar: bool,
}

#[function_component(ViewControls)]
pub fn view_controls(props: &ViewControlsProps) -> Html {
    let action = |action: ViewAction| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(action.clone()))
    };

    let on_speed = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(speed) = input.value().parse::<f32>() {
                dispatch.dispatch(ViewAction::SetSpeed(speed));
            }
        })
    };

    let on_orbits = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: Event| dispatch.dispatch(ViewAction::ToggleOrbits))
    };

    let on_fullscreen = Callback::from(|_: MouseEvent| toggle_fullscreen());

    let on_narration = {
        let narration = props.narration.clone();
        Callback::from(move |_: MouseEvent| narration.set_enabled.emit(!narration.enabled))
    };

    let paused = props.state.paused;
    let fullscreen = props.state.fullscreen;
    let fullscreen_title = if fullscreen {
        "Salir de pantalla completa (f)"
    } else {
        "Pantalla completa (f)"
    };

    html! {
        <div class="panel controls">
            <button
                class="btn btn-icon"
                title={if paused { "Reanudar (espacio)" } else { "Pausar (espacio)" }}
                onclick={action(ViewAction::TogglePause)}
            >
                if paused {
                    <Icon data={IconData::LUCIDE_PLAY} width="16px" height="16px" />
                } else {
                    <Icon data={IconData::LUCIDE_PAUSE} width="16px" height="16px" />
                }
            </button>
            <button class="btn btn-icon" title="Reiniciar vista (r)" onclick={action(ViewAction::ResetView)}>
                <Icon data={IconData::LUCIDE_ROTATE_CCW} width="16px" height="16px" />
            </button>
            <button class="btn btn-icon" title="Vista general (g)" onclick={action(ViewAction::GeneralView)}>
                <Icon data={IconData::LUCIDE_EYE} width="16px" height="16px" />
            </button>
            <button
                class={classes!("btn", "btn-icon", fullscreen.then_some("active"))}
                title={fullscreen_title}
                onclick={on_fullscreen}
            >
                if fullscreen {
                    <Icon data={IconData::LUCIDE_MINIMIZE} width="16px" height="16px" />
                } else {
                    <Icon data={IconData::LUCIDE_MAXIMIZE} width="16px" height="16px" />
                }
            </button>
            if props.narration.available {
                <button
                    class={classes!("btn", "btn-icon", props.narration.enabled.then_some("active"))}
                    title="Narración"
                    onclick={on_narration}
                >
                    if props.narration.enabled {
                        <Icon data={IconData::LUCIDE_VOLUME_2} width="16px" height="16px" />
                    } else {
                        <Icon data={IconData::LUCIDE_VOLUME_X} width="16px" height="16px" />
                    }
                </button>
            }
            if props.solar {
                <label class="control-speed">
                    <span>{ format!("Velocidad ×{:.2}", props.state.speed) }</span>
                    <input
                        type="range"
                        min="0"
                        max="5"
                        step="0.25"
                        value={props.state.speed.to_string()}
                        oninput={on_speed}
                    />
                </label>
                <label class="control-toggle">
                    <input
                        type="checkbox"
                        checked={props.state.show_orbits}
                        onchange={on_orbits}
                    />
                    { "Órbitas" }
                </label>
            }
        </div>
    }
}
