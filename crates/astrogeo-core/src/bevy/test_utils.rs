//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `ViewerHeadlessPlugin` for testing viewer logic
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::plugin::{ViewerHeadlessPlugin, ViewerMode};
use crate::bevy::resources::{CommandQueue, ViewerCommand, ViewerConfigPatch};
use crate::bevy::state_store::StateStores;
use crate::bevy::{PointerSample, PointerSampleKind};
use crate::config::{SolarSystemConfig, SolidsConfig};

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
    pub stores: StateStores,
}

impl TestApp {
    pub fn new() -> Self {
        let stores = StateStores::new();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.add_plugins(ViewerHeadlessPlugin {
            command_queue: None,
            state_stores: Some(stores.clone()),
        });
        // Animation is frame-based; pausing virtual time keeps runs
        // independent of wall-clock timing.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        app.update();
        Self { app, stores }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn update_n(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Push a command to the command queue.
    pub fn push_command(&mut self, command: ViewerCommand) {
        self.app.world().resource::<CommandQueue>().push(command);
    }

    /// Enter a mode the way the host page does: clear, yield, init.
    fn enter(&mut self, init: ViewerCommand) {
        self.push_command(ViewerCommand::ClearMode);
        self.push_command(ViewerCommand::Yield);
        self.push_command(init);
        // ClearMode, then Init, then the OnEnter transition.
        self.update_n(3);
    }

    pub fn enter_solids(&mut self, config: SolidsConfig) {
        self.enter(ViewerCommand::InitSolids { config });
    }

    pub fn enter_solar(&mut self) {
        self.enter(ViewerCommand::InitSolar {
            config: SolarSystemConfig::default(),
        });
    }

    /// Apply a configuration patch and run one frame.
    pub fn set_config(&mut self, patch: ViewerConfigPatch) {
        self.push_command(ViewerCommand::SetConfig { patch });
        self.update();
    }

    /// Queue a pointer sample for the next frame.
    pub fn pointer(&mut self, kind: PointerSampleKind, position: Vec2, time_ms: f64) {
        self.app
            .world_mut()
            .write_message(PointerSample::new(kind, position, time_ms));
    }

    pub fn mode(&self) -> ViewerMode {
        *self.world().resource::<State<ViewerMode>>().get()
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Components of type `T` on all entities, in query order.
    pub fn collect<T: Component + Clone>(&mut self) -> Vec<T> {
        let world = self.app.world_mut();
        world.query::<&T>().iter(world).cloned().collect()
    }
}
