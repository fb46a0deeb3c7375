//! Button lists for choosing a solid or a body without using the canvas.

use astrogeo_core::SolarSystemConfig;
use astrogeo_core::content::all_solids;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SolidPickerProps {
    pub selected: AttrValue,
    pub on_select: Callback<AttrValue>,
}

#[function_component(SolidPicker)]
pub fn solid_picker(props: &SolidPickerProps) -> Html {
    html! {
        <div class="panel picker solid-picker">
            { for all_solids().iter().map(|solid| {
                let on_select = props.on_select.clone();
                let id = AttrValue::Static(solid.id);
                let active = props.selected == id;
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id.clone()));
                html! {
                    <button class={classes!("btn", active.then_some("active"))} {onclick}>
                        { solid.name }
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BodyPickerProps {
    pub config: SolarSystemConfig,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

/// Sun first, then the planets in orbit order.
#[function_component(BodyPicker)]
pub fn body_picker(props: &BodyPickerProps) -> Html {
    let bodies = std::iter::once((&props.config.sun.id, &props.config.sun.name)).chain(
        props
            .config
            .planets()
            .map(|planet| (&planet.id, &planet.name)),
    );

    html! {
        <div class="panel picker body-picker">
            { for bodies.map(|(id, name)| {
                let on_select = props.on_select.clone();
                let active = props.selected.as_ref() == Some(id);
                let id = id.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id.clone()));
                html! {
                    <button class={classes!("btn", active.then_some("active"))} {onclick}>
                        { name.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
