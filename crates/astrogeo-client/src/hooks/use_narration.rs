//! Spoken narration through the Web Speech API.

use std::rc::Rc;

use astrogeo_core::NarrationGate;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};
use yew::prelude::*;

use crate::hooks::use_localstorage;

const NARRATION_LANG: &str = "es-ES";
const NARRATION_PREF_KEY: &str = "astrogeo.narration";

fn speech_synthesis() -> Option<SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

#[derive(Clone, PartialEq)]
pub struct NarrationHandle {
    /// Cancels anything in progress, then speaks the text.
    pub speak: Callback<String>,
    pub stop: Callback<()>,
    pub set_enabled: Callback<bool>,
    pub enabled: bool,
    /// Whether the browser exposes speech synthesis at all.
    pub available: bool,
}

/// Narration with a persisted on/off preference.
///
/// Speech is cancelled when the calling component unmounts.
#[hook]
pub fn use_narration() -> NarrationHandle {
    let preference = use_localstorage(NARRATION_PREF_KEY, || true);
    let gate = use_mut_ref(|| NarrationGate::new(speech_synthesis().is_some()));
    gate.borrow_mut().set_enabled(*preference);

    let stop = {
        let gate = Rc::clone(&gate);
        Callback::from(move |()| {
            if gate.borrow_mut().stop() {
                if let Some(synth) = speech_synthesis() {
                    synth.cancel();
                }
            }
        })
    };

    let speak = {
        let gate = Rc::clone(&gate);
        Callback::from(move |text: String| {
            if !gate.borrow_mut().should_speak(&text, js_sys::Date::now()) {
                return;
            }
            let Some(synth) = speech_synthesis() else {
                return;
            };
            synth.cancel();
            match SpeechSynthesisUtterance::new_with_text(&text) {
                Ok(utterance) => {
                    utterance.set_lang(NARRATION_LANG);
                    synth.speak(&utterance);
                }
                Err(e) => tracing::warn!("[narration] utterance failed: {:?}", e),
            }
        })
    };

    let set_enabled = {
        let gate = Rc::clone(&gate);
        let stop = stop.clone();
        let preference = preference.clone();
        Callback::from(move |enabled: bool| {
            gate.borrow_mut().set_enabled(enabled);
            if !enabled {
                stop.emit(());
            }
            preference.set(enabled);
        })
    };

    {
        let stop = stop.clone();
        use_effect_with((), move |_| move || stop.emit(()));
    }

    let (enabled, available) = {
        let gate = gate.borrow();
        (gate.is_enabled(), gate.is_available())
    };

    NarrationHandle {
        speak,
        stop,
        set_enabled,
        enabled,
        available,
    }
}
