//! Pointer interaction resolver.
//!
//! Turns raw pointer samples into high-level interaction events. The
//! resolver owns the transient gesture session and the double-click
//! bookkeeping; it never touches the scene or the camera directly.

use bevy::math::Vec2;

/// Presses held longer than this are drags, not clicks.
pub const CLICK_MAX_DURATION_MS: f64 = 300.0;

/// Presses that travelled farther than this are drags, not clicks.
pub const CLICK_MAX_DISTANCE_PX: f32 = 5.0;

/// Two hits on the same entity within this window form a double click.
pub const DOUBLE_CLICK_WINDOW_MS: f64 = 500.0;

/// Distance units per wheel pixel.
pub const WHEEL_ZOOM_SCALE: f32 = 0.01;

/// Distance units per pixel of pinch spread change.
pub const PINCH_ZOOM_SCALE: f32 = 0.05;

/// Resolves the selectable entity under a pointer position.
pub trait HitTester {
    fn pick(&self, pointer: Vec2) -> Option<String>;
}

impl<F> HitTester for F
where
    F: Fn(Vec2) -> Option<String>,
{
    fn pick(&self, pointer: Vec2) -> Option<String> {
        self(pointer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    DragStart,
    /// Pointer delta in pixels while dragging.
    Rotate { dx: f32, dy: f32 },
    DragEnd,
    /// Signed distance change; positive moves away.
    Zoom { delta: f32 },
    Select { id: String, is_double: bool },
    Hover { id: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    at_ms: f64,
    position: Vec2,
}

#[derive(Debug, Clone)]
struct LastHit {
    id: String,
    at_ms: f64,
}

#[derive(Debug, Default)]
pub struct InteractionResolver {
    phase: GesturePhase,
    last_position: Option<Vec2>,
    /// Kept after release so the click check can measure the gesture.
    press: Option<Press>,
    last_hit: Option<LastHit>,
    hovered: Option<String>,
    pinch_spread: Option<f32>,
}

impl InteractionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn pointer_down(&mut self, position: Vec2, now_ms: f64) -> InteractionEvent {
        self.phase = GesturePhase::Dragging;
        self.last_position = Some(position);
        self.press = Some(Press {
            at_ms: now_ms,
            position,
        });
        InteractionEvent::DragStart
    }

    /// While dragging, yields the rotation delta; otherwise re-runs the
    /// hover test and yields a change of hovered entity, if any.
    pub fn pointer_move(
        &mut self,
        position: Vec2,
        tester: Option<&dyn HitTester>,
    ) -> Option<InteractionEvent> {
        match self.phase {
            GesturePhase::Dragging => self.drag_to(position),
            GesturePhase::Idle => {
                self.last_position = Some(position);
                let hit = tester.and_then(|tester| tester.pick(position));
                self.set_hover(hit)
            }
        }
    }

    /// Like [`Self::pointer_move`] but never hit-tests: an idle move only
    /// records the position and the hovered entity is left as it was.
    pub fn track_move(&mut self, position: Vec2) -> Option<InteractionEvent> {
        match self.phase {
            GesturePhase::Dragging => self.drag_to(position),
            GesturePhase::Idle => {
                self.last_position = Some(position);
                None
            }
        }
    }

    fn drag_to(&mut self, position: Vec2) -> Option<InteractionEvent> {
        let previous = self.last_position.replace(position)?;
        let delta = position - previous;
        if delta == Vec2::ZERO {
            return None;
        }
        Some(InteractionEvent::Rotate {
            dx: delta.x,
            dy: delta.y,
        })
    }

    /// Pointer left the drawing surface.
    pub fn pointer_leave(&mut self) -> Option<InteractionEvent> {
        self.set_hover(None)
    }

    fn set_hover(&mut self, hit: Option<String>) -> Option<InteractionEvent> {
        if hit == self.hovered {
            return None;
        }
        self.hovered.clone_from(&hit);
        Some(InteractionEvent::Hover { id: hit })
    }

    pub fn pointer_up(&mut self) -> Option<InteractionEvent> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        self.phase = GesturePhase::Idle;
        self.last_position = None;
        Some(InteractionEvent::DragEnd)
    }

    /// True when the press that preceded `position`/`now_ms` qualifies as a click.
    pub fn is_click(&self, position: Vec2, now_ms: f64) -> bool {
        let Some(press) = self.press else {
            return false;
        };
        now_ms - press.at_ms <= CLICK_MAX_DURATION_MS
            && position.distance(press.position) <= CLICK_MAX_DISTANCE_PX
    }

    /// Click or tap. Without a hit tester the event is ignored.
    pub fn click(
        &mut self,
        position: Vec2,
        now_ms: f64,
        tester: Option<&dyn HitTester>,
    ) -> Option<InteractionEvent> {
        let Some(tester) = tester else {
            tracing::debug!("[interaction] click ignored: no hit tester");
            return None;
        };
        if !self.is_click(position, now_ms) {
            return None;
        }
        let id = tester.pick(position)?;
        let is_double = self.register_hit(&id, now_ms);
        Some(InteractionEvent::Select { id, is_double })
    }

    /// Records a qualifying hit and reports whether it completes a double click.
    pub fn register_hit(&mut self, id: &str, now_ms: f64) -> bool {
        let is_double = self
            .last_hit
            .as_ref()
            .is_some_and(|last| last.id == id && now_ms - last.at_ms < DOUBLE_CLICK_WINDOW_MS);
        self.last_hit = Some(LastHit {
            id: id.to_string(),
            at_ms: now_ms,
        });
        is_double
    }

    /// Wheel delta in pixels; scrolling up (negative) zooms in.
    pub fn wheel(&self, delta_y: f32) -> InteractionEvent {
        InteractionEvent::Zoom {
            delta: delta_y * WHEEL_ZOOM_SCALE,
        }
    }

    /// Two-finger spread in pixels; spreading apart zooms in.
    pub fn pinch(&mut self, spread: f32) -> Option<InteractionEvent> {
        let previous = self.pinch_spread.replace(spread)?;
        let delta = (previous - spread) * PINCH_ZOOM_SCALE;
        (delta != 0.0).then_some(InteractionEvent::Zoom { delta })
    }

    pub fn end_pinch(&mut self) {
        self.pinch_spread = None;
    }

    /// Drops the gesture session, ending an active drag.
    pub fn cancel(&mut self) -> Option<InteractionEvent> {
        self.pinch_spread = None;
        self.press = None;
        self.pointer_up()
    }

    /// Forgets everything, including double-click and hover memory.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn always(id: &'static str) -> impl Fn(Vec2) -> Option<String> {
        move |_| Some(id.to_string())
    }

    fn tap(
        resolver: &mut InteractionResolver,
        tester: &dyn HitTester,
        at: f64,
        held: f64,
        moved: f32,
    ) -> Option<InteractionEvent> {
        resolver.pointer_down(Vec2::new(100.0, 100.0), at);
        resolver.pointer_up();
        resolver.click(Vec2::new(100.0 + moved, 100.0), at + held, Some(tester))
    }

    #[test]
    fn double_click_within_window() {
        let tester = always("tierra");
        let mut resolver = InteractionResolver::new();
        assert_eq!(
            tap(&mut resolver, &tester, 0.0, 50.0, 0.0),
            Some(InteractionEvent::Select {
                id: "tierra".into(),
                is_double: false,
            })
        );
        assert_eq!(
            tap(&mut resolver, &tester, 300.0, 50.0, 0.0),
            Some(InteractionEvent::Select {
                id: "tierra".into(),
                is_double: true,
            })
        );
    }

    #[test]
    fn clicks_600ms_apart_are_both_single() {
        let tester = always("tierra");
        let mut resolver = InteractionResolver::new();
        let first = tap(&mut resolver, &tester, 0.0, 50.0, 0.0);
        let second = tap(&mut resolver, &tester, 600.0, 50.0, 0.0);
        let single = Some(InteractionEvent::Select {
            id: "tierra".into(),
            is_double: false,
        });
        assert_eq!(first, single);
        assert_eq!(second, single);
    }

    #[test]
    fn different_entities_do_not_pair() {
        let mut resolver = InteractionResolver::new();
        assert!(!resolver.register_hit("marte", 0.0));
        assert!(!resolver.register_hit("venus", 100.0));
        assert!(resolver.register_hit("venus", 200.0));
    }

    #[test]
    fn click_rejection_thresholds() {
        let tester = always("cubo");

        let mut resolver = InteractionResolver::new();
        assert_eq!(tap(&mut resolver, &tester, 0.0, 301.0, 0.0), None);

        let mut resolver = InteractionResolver::new();
        assert!(tap(&mut resolver, &tester, 0.0, 299.0, 4.0).is_some());

        for held in [10.0, 150.0, 299.0] {
            let mut resolver = InteractionResolver::new();
            assert_eq!(tap(&mut resolver, &tester, 0.0, held, 6.0), None);
        }
    }

    #[test]
    fn missing_hit_tester_ignores_click() {
        let mut resolver = InteractionResolver::new();
        resolver.pointer_down(Vec2::ZERO, 0.0);
        resolver.pointer_up();
        assert_eq!(resolver.click(Vec2::ZERO, 10.0, None), None);
        // The ignored click leaves no double-click memory behind.
        assert!(!resolver.register_hit("sol", 20.0));
    }

    #[test]
    fn drag_emits_deltas_between_start_and_end() {
        let mut resolver = InteractionResolver::new();
        assert_eq!(resolver.pointer_down(Vec2::new(10.0, 10.0), 0.0), InteractionEvent::DragStart);
        assert_eq!(
            resolver.pointer_move(Vec2::new(15.0, 8.0), None),
            Some(InteractionEvent::Rotate { dx: 5.0, dy: -2.0 })
        );
        assert_eq!(
            resolver.pointer_move(Vec2::new(20.0, 8.0), None),
            Some(InteractionEvent::Rotate { dx: 5.0, dy: 0.0 })
        );
        assert_eq!(resolver.pointer_up(), Some(InteractionEvent::DragEnd));
        assert_eq!(resolver.pointer_up(), None);
        assert!(!resolver.is_dragging());
    }

    #[test]
    fn hover_reports_changes_only() {
        let pick = |p: Vec2| (p.x < 50.0).then(|| "sol".to_string());
        let tester: &dyn HitTester = &pick;
        let mut resolver = InteractionResolver::new();
        assert_eq!(
            resolver.pointer_move(Vec2::new(10.0, 0.0), Some(tester)),
            Some(InteractionEvent::Hover {
                id: Some("sol".into()),
            })
        );
        assert_eq!(resolver.pointer_move(Vec2::new(20.0, 0.0), Some(tester)), None);
        assert_eq!(
            resolver.pointer_move(Vec2::new(80.0, 0.0), Some(tester)),
            Some(InteractionEvent::Hover { id: None })
        );
        assert_eq!(resolver.pointer_leave(), None);
    }

    #[test]
    fn tracked_moves_skip_the_hit_test_but_still_drag() {
        let picks = Cell::new(0);
        let pick = |p: Vec2| {
            picks.set(picks.get() + 1);
            (p.x < 50.0).then(|| "sol".to_string())
        };
        let tester: &dyn HitTester = &pick;
        let mut resolver = InteractionResolver::new();

        assert_eq!(resolver.track_move(Vec2::new(10.0, 0.0)), None);
        assert_eq!(resolver.track_move(Vec2::new(80.0, 0.0)), None);
        assert_eq!(picks.get(), 0);
        assert_eq!(
            resolver.pointer_move(Vec2::new(10.0, 0.0), Some(tester)),
            Some(InteractionEvent::Hover {
                id: Some("sol".into()),
            })
        );
        assert_eq!(picks.get(), 1);
        // An untested move does not clear the hover.
        assert_eq!(resolver.track_move(Vec2::new(80.0, 0.0)), None);
        assert_eq!(resolver.pointer_move(Vec2::new(20.0, 0.0), Some(tester)), None);

        resolver.pointer_down(Vec2::new(20.0, 0.0), 0.0);
        assert_eq!(
            resolver.track_move(Vec2::new(25.0, 3.0)),
            Some(InteractionEvent::Rotate { dx: 5.0, dy: 3.0 })
        );
        assert_eq!(picks.get(), 2);
    }

    #[test]
    fn wheel_and_pinch_scale_deltas() {
        let mut resolver = InteractionResolver::new();
        assert_eq!(resolver.wheel(-100.0), InteractionEvent::Zoom { delta: -1.0 });

        assert_eq!(resolver.pinch(200.0), None);
        assert_eq!(resolver.pinch(220.0), Some(InteractionEvent::Zoom { delta: -1.0 }));
        resolver.end_pinch();
        assert_eq!(resolver.pinch(100.0), None);
    }
}
