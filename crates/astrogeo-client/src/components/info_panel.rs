//! Fact sheets for the selected body or solid.

use astrogeo_core::content::{body_facts, solid_facts};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct BodyInfoPanelProps {
    pub id: AttrValue,
    /// Whether the camera is currently flying to the body.
    #[prop_or(false)]
    pub following: bool,
    pub on_close: Callback<()>,
}

#[function_component(BodyInfoPanel)]
pub fn body_info_panel(props: &BodyInfoPanelProps) -> Html {
    let Some(body) = body_facts(&props.id) else {
        return html! {};
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <aside class="panel info-panel">
            <header class="info-header">
                <h2>{ body.name }</h2>
                if props.following {
                    <span class="badge">{ "Siguiendo" }</span>
                }
                <button class="btn btn-icon" title="Cerrar" onclick={on_close}>
                    <Icon data={IconData::LUCIDE_X} width="14px" height="14px" />
                </button>
            </header>
            <p>{ body.description }</p>
            <dl class="facts">
                { for body.facts.iter().map(|fact| html! {
                    <>
                        <dt>{ fact.label }</dt>
                        <dd>{ fact.value }</dd>
                    </>
                }) }
            </dl>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct SolidInfoPanelProps {
    pub id: AttrValue,
}

#[function_component(SolidInfoPanel)]
pub fn solid_info_panel(props: &SolidInfoPanelProps) -> Html {
    let solid = solid_facts(&props.id);

    html! {
        <aside class="panel info-panel">
            <header class="info-header">
                <h2>{ solid.name }</h2>
            </header>
            <p>{ solid.description }</p>
            <dl class="facts">
                <dt>{ "Caras" }</dt>
                <dd>{ solid.faces.to_string() }</dd>
                <dt>{ "Aristas" }</dt>
                <dd>{ solid.edges.to_string() }</dd>
                <dt>{ "Vértices" }</dt>
                <dd>{ solid.vertices.to_string() }</dd>
                <dt>{ "Euler (V − A + C)" }</dt>
                <dd>{ solid.euler().to_string() }</dd>
            </dl>
        </aside>
    }
}
