//! Keeps the viewer's drawing surface sized to its container.
//!
//! Three triggers feed one `ResizeCoordinator`: the container's
//! `ResizeObserver`, debounced window resizes and fullscreen changes
//! (applied after two animation frames). Superseded timers and frames
//! still fire but their stale tickets are refused.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use astrogeo_core::ResizeCoordinator;
use astrogeo_core::resize::{FULLSCREEN_SETTLE_FRAMES, ResizeSource, ResizeTicket, viewport_size};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::hooks::resize_viewer;
use crate::util::is_fullscreen;

struct ResizeScheduler {
    container: NodeRef,
    coordinator: RefCell<ResizeCoordinator>,
    mounted: Cell<bool>,
}

impl ResizeScheduler {
    fn new(container: NodeRef) -> Self {
        Self {
            container,
            coordinator: RefCell::new(ResizeCoordinator::new()),
            mounted: Cell::new(true),
        }
    }

    fn schedule(self: &Rc<Self>, source: ResizeSource) {
        if !self.mounted.get() {
            return;
        }
        let ticket = self.coordinator.borrow_mut().schedule(source);
        let this = Rc::clone(self);
        match source {
            ResizeSource::Fullscreen => {
                after_frames(FULLSCREEN_SETTLE_FRAMES, move || this.finish(ticket));
            }
            ResizeSource::Container | ResizeSource::Window => {
                let _ = Timeout::new(source.debounce_ms(), move || this.finish(ticket)).forget();
            }
        }
    }

    fn finish(&self, ticket: ResizeTicket) {
        if self.mounted.get() && self.coordinator.borrow_mut().complete(ticket) {
            self.apply();
        }
    }

    /// Measures the container and pushes the clamped size to the viewer.
    fn apply(&self) {
        let Some(element) = self.container.cast::<web_sys::Element>() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let window = gloo::utils::window();
        let viewport = (
            window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(rect.width()),
            window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(rect.height()),
        );

        if let Some(size) = viewport_size((rect.width(), rect.height()), viewport) {
            tracing::debug!("[resize] applying {}x{}", size.width, size.height);
            if let Err(e) = resize_viewer(size.width, size.height) {
                tracing::warn!("[resize] resize_viewer failed: {:?}", e);
            }
        }
    }

    fn shutdown(&self) {
        self.mounted.set(false);
        self.coordinator.borrow_mut().cancel_all();
    }
}

/// Runs `f` after `frames` animation frames.
fn after_frames(frames: u8, f: impl FnOnce() + 'static) {
    if frames == 0 {
        f();
        return;
    }
    let callback = Closure::once_into_js(move || after_frames(frames - 1, f));
    if let Err(e) = gloo::utils::window().request_animation_frame(callback.unchecked_ref()) {
        tracing::warn!("[resize] requestAnimationFrame failed: {:?}", e);
    }
}

/// Reports a fullscreen transition; without a callback this does nothing.
fn notify_fullscreen(callback: Option<&Callback<bool>>, fullscreen: bool) {
    if let Some(callback) = callback {
        callback.emit(fullscreen);
    }
}

/// Sizes the viewer to `container`, clamped to the browser viewport.
///
/// `on_fullscreen_change` receives the new fullscreen state on every
/// `fullscreenchange`, including leaving with Esc. All observers and
/// listeners are removed on unmount, and pending timers or frames that
/// fire afterwards do nothing.
#[hook]
pub fn use_viewport_resize(container: NodeRef, on_fullscreen_change: Option<Callback<bool>>) {
    let latest_callback = use_mut_ref(|| None::<Callback<bool>>);
    *latest_callback.borrow_mut() = on_fullscreen_change;

    use_effect_with((), move |_| {
        let scheduler = Rc::new(ResizeScheduler::new(container.clone()));

        let observer = {
            let scheduler = Rc::clone(&scheduler);
            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries| {
                scheduler.schedule(ResizeSource::Container);
            });
            let observer = web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref());
            match (observer, container.cast::<web_sys::Element>()) {
                (Ok(observer), Some(element)) => {
                    observer.observe(&element);
                    Some((observer, callback))
                }
                (Err(e), _) => {
                    tracing::warn!("[resize] ResizeObserver unavailable: {:?}", e);
                    None
                }
                (Ok(_), None) => None,
            }
        };

        let window_listener = {
            let scheduler = Rc::clone(&scheduler);
            EventListener::new(&gloo::utils::window(), "resize", move |_| {
                scheduler.schedule(ResizeSource::Window);
            })
        };

        let fullscreen_listener = {
            let scheduler = Rc::clone(&scheduler);
            EventListener::new(&gloo::utils::document(), "fullscreenchange", move |_| {
                scheduler.schedule(ResizeSource::Fullscreen);
                notify_fullscreen(latest_callback.borrow().as_ref(), is_fullscreen());
            })
        };

        scheduler.apply();

        move || {
            scheduler.shutdown();
            if let Some((observer, _callback)) = observer {
                observer.disconnect();
            }
            drop(window_listener);
            drop(fullscreen_listener);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::wasm_bindgen_test;
    use yew::Callback;

    use super::notify_fullscreen;

    #[wasm_bindgen_test]
    fn fullscreen_state_reaches_the_callback() {
        let seen = Rc::new(Cell::new(None));
        let callback = {
            let seen = Rc::clone(&seen);
            Callback::from(move |fullscreen: bool| seen.set(Some(fullscreen)))
        };

        notify_fullscreen(Some(&callback), true);
        assert_eq!(seen.get(), Some(true));
        notify_fullscreen(Some(&callback), false);
        assert_eq!(seen.get(), Some(false));
    }

    #[wasm_bindgen_test]
    fn missing_fullscreen_callback_is_a_no_op() {
        notify_fullscreen(None, true);
    }
}
