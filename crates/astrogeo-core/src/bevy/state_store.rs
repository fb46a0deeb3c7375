//! Shared state stores for Bevy-Yew communication.
//!
//! The ECS writes into these stores; Yew hooks poll them and re-render only
//! when a store's version changes.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::Resource;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Undrained events beyond this are dropped, oldest first.
const MAX_PENDING_EVENTS: usize = 64;

// ============================================================================
// Data Types
// ============================================================================

/// Event emitted by the viewer for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerEvent {
    EntityClicked { id: String, is_double: bool },
    DragStart,
    DragEnd,
    Hover { id: Option<String> },
}

/// Active visualization, as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Idle,
    Solids,
    Solar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CameraSummary {
    pub distance: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub target: [f32; 3],
}

/// View state summary for UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewSummary {
    pub mode: ViewMode,
    pub selected: Option<String>,
    pub hovered: Option<String>,
    pub paused: bool,
    pub speed: f32,
    pub decomposed: bool,
    pub following: bool,
    pub camera: CameraSummary,
}

// ============================================================================
// Individual Stores
// ============================================================================

/// Outgoing viewer events, drained by the UI.
#[derive(Debug, Default)]
pub struct ViewerEventStore {
    events: RwLock<VecDeque<ViewerEvent>>,
    version: RwLock<u64>,
}

impl ViewerEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_version(&self) -> u64 {
        *self.version.read()
    }

    pub fn push(&self, event: ViewerEvent) {
        let mut events = self.events.write();
        events.push_back(event);
        while events.len() > MAX_PENDING_EVENTS {
            events.pop_front();
        }
        *self.version.write() += 1;
    }

    /// Takes every pending event.
    pub fn drain(&self) -> Vec<ViewerEvent> {
        self.events.write().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    pub fn clear(&self) {
        self.events.write().clear();
        *self.version.write() += 1;
    }
}

/// Store for the view summary.
#[derive(Debug, Default)]
pub struct ViewStore {
    summary: RwLock<ViewSummary>,
    version: RwLock<u64>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_summary(&self) -> ViewSummary {
        self.summary.read().clone()
    }

    pub fn get_version(&self) -> u64 {
        *self.version.read()
    }

    /// Replaces the summary, bumping the version only on change.
    pub fn update(&self, summary: ViewSummary) {
        let mut current = self.summary.write();
        if *current != summary {
            *current = summary;
            *self.version.write() += 1;
        }
    }
}

// ============================================================================
// Combined State Stores
// ============================================================================

/// All state stores combined for easy sharing.
#[derive(Debug, Clone, Resource)]
pub struct StateStores {
    pub events: Arc<ViewerEventStore>,
    pub view: Arc<ViewStore>,
}

impl StateStores {
    pub fn new() -> Self {
        Self {
            events: Arc::new(ViewerEventStore::new()),
            view: Arc::new(ViewStore::new()),
        }
    }

    /// Forgets everything left over from the previous view.
    pub fn reset_for_new_view(&self) {
        self.events.clear();
        self.view.update(ViewSummary::default());
    }
}

impl Default for StateStores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_store_drains_in_order_and_bounds_backlog() {
        let store = ViewerEventStore::new();
        store.push(ViewerEvent::DragStart);
        store.push(ViewerEvent::DragEnd);
        assert_eq!(store.get_version(), 2);
        assert_eq!(store.drain(), vec![ViewerEvent::DragStart, ViewerEvent::DragEnd]);
        assert!(store.is_empty());

        for _ in 0..(MAX_PENDING_EVENTS + 10) {
            store.push(ViewerEvent::DragStart);
        }
        assert_eq!(store.len(), MAX_PENDING_EVENTS);
    }

    #[test]
    fn view_store_versions_only_on_change() {
        let store = ViewStore::new();
        store.update(ViewSummary::default());
        assert_eq!(store.get_version(), 0);
        store.update(ViewSummary {
            paused: true,
            ..ViewSummary::default()
        });
        assert_eq!(store.get_version(), 1);
        assert!(store.get_summary().paused);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&ViewerEvent::EntityClicked {
            id: "tierra".into(),
            is_double: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"entity_clicked","id":"tierra","is_double":true}"#);
    }
}
