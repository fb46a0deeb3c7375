//! Page layout with the top navigation bar.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
    /// Lets pointer events through to the canvas outside the panels.
    #[prop_or(false)]
    pub overlay: bool,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>();
    let link_class = |target: &Route| {
        if route.as_ref() == Some(target) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <div class={classes!("app-layout", props.overlay.then_some("app-layout-overlay"))}>
            <nav class="app-nav">
                <Link<Route> to={Route::Home} classes="nav-brand">{ "Astrogeo" }</Link<Route>>
                <Link<Route> to={Route::Solids} classes={link_class(&Route::Solids)}>
                    { "Sólidos" }
                </Link<Route>>
                <Link<Route> to={Route::Solar} classes={link_class(&Route::Solar)}>
                    { "Sistema solar" }
                </Link<Route>>
            </nav>

            <main class="app-main">
                { props.children.clone() }
            </main>
        </div>
    }
}
