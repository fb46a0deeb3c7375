mod use_keyboard_shortcuts;
mod use_localstorage;
mod use_narration;
mod use_viewer;
mod use_viewport_resize;

pub use use_keyboard_shortcuts::{KeyboardShortcutsConfig, use_keyboard_shortcuts};
pub use use_localstorage::use_localstorage;
pub use use_narration::{NarrationHandle, use_narration};
pub use use_viewer::*;
pub use use_viewport_resize::use_viewport_resize;
