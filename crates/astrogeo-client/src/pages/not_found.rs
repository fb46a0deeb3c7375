//! 404 Not Found page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <Layout>
            <section class="page not-found-page">
                <h1>{ "404" }</h1>
                <p>{ "Página no encontrada" }</p>
                <Link<Route> to={Route::Home}>{ "Volver al inicio" }</Link<Route>>
            </section>
        </Layout>
    }
}
