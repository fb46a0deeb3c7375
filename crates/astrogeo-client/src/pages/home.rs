//! Landing page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <Layout>
            <section class="page home-page">
                <h1>{ "Astrogeo" }</h1>
                <p>{ "Explora figuras geométricas y el sistema solar en 3D." }</p>
                <div class="home-cards">
                    <Link<Route> to={Route::Solids} classes="home-card">
                        <h2>{ "Sólidos geométricos" }</h2>
                        <p>{ "Caras, aristas y vértices de cubos, pirámides, prismas y poliedros regulares." }</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Solar} classes="home-card">
                        <h2>{ "Sistema solar" }</h2>
                        <p>{ "El Sol y los ocho planetas en órbita. Toca un planeta para conocerlo." }</p>
                    </Link<Route>>
                </div>
            </section>
        </Layout>
    }
}
