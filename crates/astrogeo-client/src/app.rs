//! Main application component.

use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{VIEWER_CANVAS_ID, ViewerProvider};
use crate::pages::{HomePage, NotFoundPage, SolarPage, SolidsPage};
use crate::routes::Route;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Solids => html! { <SolidsPage /> },
        Route::Solar => html! { <SolarPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Hides the canvas on routes without a viewer.
///
/// The Bevy app keeps running across navigations; only its canvas is
/// hidden and stops taking pointer events.
#[function_component(CanvasVisibilityManager)]
fn canvas_visibility_manager() -> Html {
    let route = use_route::<Route>();
    let visible = route.as_ref().is_some_and(Route::shows_viewer);

    use_effect_with(visible, move |visible| {
        let canvas = gloo::utils::document().get_element_by_id(VIEWER_CANVAS_ID);
        if let Some(style) = canvas
            .as_ref()
            .and_then(|canvas| canvas.dyn_ref::<web_sys::HtmlElement>())
            .map(web_sys::HtmlElement::style)
        {
            let (visibility, pointer_events) = if *visible {
                ("visible", "auto")
            } else {
                ("hidden", "none")
            };
            let _ = style.set_property("visibility", visibility);
            let _ = style.set_property("pointer-events", pointer_events);
        }
    });

    html! {}
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ViewerProvider canvas_id={VIEWER_CANVAS_ID}>
                <CanvasVisibilityManager />
                <Switch<Route> render={switch} />
            </ViewerProvider>
        </BrowserRouter>
    }
}
