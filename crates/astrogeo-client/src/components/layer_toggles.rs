//! Faces / edges / vertices switches and the decomposition button.

use yew::prelude::*;

use crate::state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct LayerTogglesProps {
    pub state: ViewState,
    pub dispatch: UseReducerDispatcher<ViewState>,
}

#[function_component(LayerToggles)]
pub fn layer_toggles(props: &LayerTogglesProps) -> Html {
    let toggle = |label: &'static str, checked: bool, action: ViewAction| {
        let dispatch = props.dispatch.clone();
        let onchange = Callback::from(move |_: Event| dispatch.dispatch(action.clone()));
        html! {
            <label class="control-toggle">
                <input type="checkbox" {checked} {onchange} />
                { label }
            </label>
        }
    };

    let on_decompose = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(ViewAction::ToggleDecomposed))
    };

    let layers = props.state.layers;

    html! {
        <div class="panel layer-toggles">
            { toggle("Caras", layers.faces, ViewAction::ToggleFaces) }
            { toggle("Aristas", layers.edges, ViewAction::ToggleEdges) }
            { toggle("Vértices", layers.vertices, ViewAction::ToggleVertices) }
            <button
                class={classes!("btn", props.state.decomposed.then_some("active"))}
                title="Descomponer (d)"
                onclick={on_decompose}
            >
                { if props.state.decomposed { "Unir caras" } else { "Descomponer" } }
            </button>
        </div>
    }
}
