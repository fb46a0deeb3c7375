//! Systems for the viewer.
//!
//! Organized by functionality:
//! - command: Command queue processing from WASM
//! - frame: Per-frame context from the live configuration
//! - scene: Scene spawning/cleanup per mode
//! - camera: Orbital camera input, view ticks, follow
//! - interaction: Pointer gestures and picking
//! - animation: Orbits and spins
//! - layers: Layer visibility and decomposition
//! - state_sync: Sync ECS state to shared stores for UI
//! - rendering, input, resize: Window/GPU side (windowed builds only)

pub mod animation;
pub mod camera;
pub mod command;
pub mod frame;
pub mod hierarchy;
pub mod interaction;
pub mod layers;
pub mod scene;
pub mod state_sync;

#[cfg(feature = "windowed")]
pub mod input;
#[cfg(feature = "windowed")]
pub mod rendering;
#[cfg(feature = "windowed")]
pub mod resize;

pub use animation::*;
pub use camera::*;
pub use command::*;
pub use frame::*;
pub use hierarchy::*;
pub use interaction::*;
pub use layers::*;
pub use scene::*;
pub use state_sync::*;

#[cfg(feature = "windowed")]
pub use input::*;
#[cfg(feature = "windowed")]
pub use rendering::*;
#[cfg(feature = "windowed")]
pub use resize::*;
