//! Application routes.

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    /// Geometric solids viewer.
    #[at("/solidos")]
    Solids,
    /// Solar system viewer.
    #[at("/sistema-solar")]
    Solar,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that show the 3D canvas.
    pub fn shows_viewer(&self) -> bool {
        matches!(self, Self::Solids | Self::Solar)
    }
}
