mod fullscreen;

pub use fullscreen::{is_fullscreen, toggle_fullscreen};
