//! Region of the page the viewer draws into.

use yew::prelude::*;

use crate::hooks::{ViewerInit, use_viewer, use_viewport_resize};

#[derive(Properties, PartialEq)]
pub struct ViewerHostProps {
    pub init: ViewerInit,
    /// Called with the new state whenever the document enters or leaves
    /// fullscreen.
    #[prop_or_default]
    pub on_fullscreen_change: Option<Callback<bool>>,
}

/// Switches the viewer to `init` once the app is up (and again whenever
/// `init` changes), keeps the surface sized to this element, and clears
/// the mode on unmount.
#[function_component(ViewerHost)]
pub fn viewer_host(props: &ViewerHostProps) -> Html {
    let viewer = use_viewer();
    let container = use_node_ref();

    use_viewport_resize(container.clone(), props.on_fullscreen_change.clone());

    let latest = use_mut_ref(|| viewer.clone());
    *latest.borrow_mut() = viewer.clone();

    use_effect_with((props.init.clone(), viewer.initialized), move |(init, _)| {
        if let Err(e) = viewer.init(init) {
            tracing::debug!("ViewerHost: init deferred: {}", e);
        }
    });

    use_effect_with((), move |_| {
        move || {
            let viewer = latest.borrow().clone();
            if let Err(e) = viewer.clear() {
                tracing::debug!("ViewerHost: clear skipped: {}", e);
            }
        }
    });

    html! {
        <div ref={container} class="viewer-host" />
    }
}
