//! Keyboard shortcuts for the viewer pages.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Callbacks per shortcut; unset ones leave the key alone.
#[derive(Clone, PartialEq)]
pub struct KeyboardShortcutsConfig {
    /// Space.
    pub on_toggle_pause: Option<Callback<()>>,
    /// `r`.
    pub on_reset_view: Option<Callback<()>>,
    /// `g`.
    pub on_general_view: Option<Callback<()>>,
    /// `f`.
    pub on_fullscreen: Option<Callback<()>>,
    /// `d`.
    pub on_decompose: Option<Callback<()>>,
    pub enabled: bool,
}

impl Default for KeyboardShortcutsConfig {
    fn default() -> Self {
        Self {
            on_toggle_pause: None,
            on_reset_view: None,
            on_general_view: None,
            on_fullscreen: None,
            on_decompose: None,
            enabled: true,
        }
    }
}

impl KeyboardShortcutsConfig {
    fn callback_for(&self, key: &str) -> Option<&Callback<()>> {
        match key {
            " " => self.on_toggle_pause.as_ref(),
            "r" | "R" => self.on_reset_view.as_ref(),
            "g" | "G" => self.on_general_view.as_ref(),
            "f" | "F" => self.on_fullscreen.as_ref(),
            "d" | "D" => self.on_decompose.as_ref(),
            _ => None,
        }
    }
}

/// Check if the event target is an input element (input, textarea, etc.)
fn is_input_element(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|element| {
            let tag_name = element.tag_name().to_lowercase();
            matches!(tag_name.as_str(), "input" | "textarea" | "select")
        })
}

/// Attaches a document-level keydown listener for the viewer shortcuts.
///
/// Modifier combinations, auto-repeat and keys typed into form fields are
/// ignored.
#[hook]
pub fn use_keyboard_shortcuts(config: KeyboardShortcutsConfig) {
    let listener_ref = use_mut_ref(|| None::<EventListener>);

    use_effect_with(config, move |config| {
        *listener_ref.borrow_mut() = None;

        if config.enabled {
            let config = config.clone();
            let document = gloo::utils::document();

            let listener = EventListener::new(&document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.ctrl_key() || event.meta_key() || event.alt_key() || event.repeat() {
                    return;
                }
                if is_input_element(event) {
                    return;
                }
                if let Some(cb) = config.callback_for(&event.key()) {
                    event.prevent_default();
                    cb.emit(());
                }
            });

            *listener_ref.borrow_mut() = Some(listener);
        }

        move || {
            *listener_ref.borrow_mut() = None;
        }
    });
}
