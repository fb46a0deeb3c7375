//! Bevy-based scene engine for the astrogeo viewer.
//!
//! This module provides the ECS integration shared by both visualizations
//! (geometric solids and the solar system): components, resources,
//! messages, systems, and the wasm entry points used by the Yew client.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod state_store;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

#[cfg(all(target_arch = "wasm32", feature = "windowed"))]
pub mod wasm_entry;

#[cfg(all(target_arch = "wasm32", feature = "windowed"))]
pub use wasm_entry::*;

pub use components::*;
pub use events::*;
#[cfg(feature = "windowed")]
pub use plugin::ViewerUnifiedPlugin;
pub use plugin::{ViewerHeadlessPlugin, ViewerMode, ViewerSet};
pub use resources::*;
pub use state_store::{
    CameraSummary, StateStores, ViewMode, ViewStore, ViewSummary, ViewerEvent, ViewerEventStore,
};
