//! Astrogeo Core Library
//!
//! Scene, camera and interaction engine behind the two educational 3D
//! visualizations: geometric solids and the solar system.
//!
//! The pure modules (geometry, camera, interaction, animation, content)
//! have no ECS dependency and are tested directly; `bevy` wires them into
//! a headless plugin plus a windowed plugin for the browser.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod camera;
pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod narration;
pub mod raycast;
pub mod resize;
pub mod ticks;

// Bevy integration
pub mod bevy;

pub use camera::{CameraController, CameraPreset, CameraState};
pub use config::{LayerFlags, PlanetConfig, SolarSystemConfig, SolidsConfig};
pub use content::{BodyFacts, SolidFacts, body_facts, solid_facts};
pub use error::{CommandError, ConfigError};
pub use geometry::{SolidGeometry, SolidKind};
pub use interaction::{HitTester, InteractionEvent, InteractionResolver};
pub use narration::NarrationGate;
pub use resize::{ResizeCoordinator, ResizeSource, ViewportSize};
