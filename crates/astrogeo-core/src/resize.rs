//! Resize coordination for the drawing surface.
//!
//! Each trigger source owns one pending slot. Scheduling a new resize for a
//! source supersedes the previous one, and completing a superseded ticket
//! is refused, so at most one recomputation per source is ever in flight.

use serde::{Deserialize, Serialize};

/// Debounce for container box changes.
pub const CONTAINER_RESIZE_DEBOUNCE_MS: u32 = 50;

/// Debounce for browser window resizes.
pub const WINDOW_RESIZE_DEBOUNCE_MS: u32 = 150;

/// Animation frames to wait after a fullscreen transition.
pub const FULLSCREEN_SETTLE_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeSource {
    Container,
    Window,
    Fullscreen,
}

impl ResizeSource {
    const fn slot(self) -> usize {
        match self {
            Self::Container => 0,
            Self::Window => 1,
            Self::Fullscreen => 2,
        }
    }

    /// Timer delay before the resize applies. Fullscreen waits on frames instead.
    pub const fn debounce_ms(self) -> u32 {
        match self {
            Self::Container => CONTAINER_RESIZE_DEBOUNCE_MS,
            Self::Window => WINDOW_RESIZE_DEBOUNCE_MS,
            Self::Fullscreen => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeTicket {
    pub source: ResizeSource,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ResizeCoordinator {
    pending: [Option<u64>; 3],
    generation: u64,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the slot of `source`, superseding any pending ticket.
    pub fn schedule(&mut self, source: ResizeSource) -> ResizeTicket {
        self.generation += 1;
        self.pending[source.slot()] = Some(self.generation);
        ResizeTicket {
            source,
            generation: self.generation,
        }
    }

    /// Releases the slot; false when `ticket` was superseded or cancelled.
    pub fn complete(&mut self, ticket: ResizeTicket) -> bool {
        let slot = &mut self.pending[ticket.source.slot()];
        if *slot == Some(ticket.generation) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self, source: ResizeSource) -> bool {
        self.pending[source.slot()].is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending = [None; 3];
    }
}

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Container size clamped to the browser viewport; `None` when degenerate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn viewport_size(container: (f64, f64), viewport: (f64, f64)) -> Option<ViewportSize> {
    let width = container.0.min(viewport.0).floor();
    let height = container.1.min(viewport.1).floor();
    let finite = container.0.is_finite() && container.1.is_finite();
    if !finite || width < 1.0 || height < 1.0 {
        tracing::warn!(
            "[resize] skipping degenerate size {}x{}",
            container.0,
            container.1
        );
        return None;
    }
    Some(ViewportSize {
        width: width as u32,
        height: height as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_pending_one() {
        let mut coordinator = ResizeCoordinator::new();
        let stale = coordinator.schedule(ResizeSource::Window);
        let fresh = coordinator.schedule(ResizeSource::Window);
        assert!(!coordinator.complete(stale));
        assert!(coordinator.is_pending(ResizeSource::Window));
        assert!(coordinator.complete(fresh));
        assert!(!coordinator.is_pending(ResizeSource::Window));
        assert!(!coordinator.complete(fresh));
    }

    #[test]
    fn sources_are_independent() {
        let mut coordinator = ResizeCoordinator::new();
        let window = coordinator.schedule(ResizeSource::Window);
        let fullscreen = coordinator.schedule(ResizeSource::Fullscreen);
        let container = coordinator.schedule(ResizeSource::Container);
        assert!(coordinator.complete(window));
        assert!(coordinator.complete(container));
        assert!(coordinator.complete(fullscreen));
    }

    #[test]
    fn cancel_all_invalidates_every_ticket() {
        let mut coordinator = ResizeCoordinator::new();
        let ticket = coordinator.schedule(ResizeSource::Container);
        coordinator.cancel_all();
        assert!(!coordinator.complete(ticket));
    }

    #[test]
    fn size_is_clamped_to_viewport() {
        assert_eq!(
            viewport_size((1200.5, 900.0), (1024.0, 768.0)),
            Some(ViewportSize {
                width: 1024,
                height: 768,
            })
        );
        assert_eq!(
            viewport_size((640.9, 480.2), (1024.0, 768.0)),
            Some(ViewportSize {
                width: 640,
                height: 480,
            })
        );
    }

    #[test]
    fn degenerate_sizes_are_skipped() {
        assert_eq!(viewport_size((0.0, 480.0), (1024.0, 768.0)), None);
        assert_eq!(viewport_size((640.0, -3.0), (1024.0, 768.0)), None);
        assert_eq!(viewport_size((f64::NAN, 480.0), (1024.0, 768.0)), None);
    }

    #[test]
    fn aspect_ratio() {
        let size = ViewportSize {
            width: 800,
            height: 400,
        };
        assert!((size.aspect() - 2.0).abs() < f32::EPSILON);
    }
}
