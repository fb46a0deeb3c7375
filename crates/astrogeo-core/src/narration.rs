//! Narration gating shared by the speech hook.
//!
//! Speech itself lives in the client; this decides whether a request
//! should reach the speech engine at all.

/// Identical text requested again within this window is dropped.
pub const NARRATION_DEBOUNCE_MS: f64 = 300.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NarrationGate {
    enabled: bool,
    available: bool,
    last: Option<(String, f64)>,
}

impl NarrationGate {
    /// `available` is the one-time probe of the host speech engine.
    pub fn new(available: bool) -> Self {
        if !available {
            tracing::warn!("[narration] speech synthesis unavailable, narration disabled");
        }
        Self {
            enabled: true,
            available,
            last: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && self.available
    }

    /// Disabling also forgets the debounce memory.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.last = None;
        }
    }

    /// Decides whether `text` should be spoken now, recording it if so.
    pub fn should_speak(&mut self, text: &str, now_ms: f64) -> bool {
        if !self.is_enabled() || text.trim().is_empty() {
            return false;
        }
        if let Some((last, at)) = &self.last {
            if last == text && now_ms - at < NARRATION_DEBOUNCE_MS {
                return false;
            }
        }
        self.last = Some((text.to_string(), now_ms));
        true
    }

    /// Whether a `stop()` needs to reach the speech engine.
    pub fn stop(&mut self) -> bool {
        self.last = None;
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_is_debounced() {
        let mut gate = NarrationGate::new(true);
        assert!(gate.should_speak("Tierra", 0.0));
        assert!(!gate.should_speak("Tierra", 299.0));
        assert!(gate.should_speak("Marte", 310.0));
        assert!(gate.should_speak("Tierra", 320.0));
        assert!(gate.should_speak("Tierra", 700.0));
    }

    #[test]
    fn stop_clears_debounce_memory() {
        let mut gate = NarrationGate::new(true);
        assert!(gate.should_speak("Sol", 0.0));
        assert!(gate.stop());
        assert!(gate.should_speak("Sol", 10.0));
    }

    #[test]
    fn unavailable_or_disabled_never_speaks() {
        let mut gate = NarrationGate::new(false);
        assert!(!gate.should_speak("Sol", 0.0));
        assert!(!gate.stop());

        let mut gate = NarrationGate::new(true);
        gate.set_enabled(false);
        assert!(!gate.should_speak("Sol", 0.0));
        gate.set_enabled(true);
        assert!(gate.should_speak("Sol", 1.0));
        assert!(!gate.should_speak("   ", 2.0));
    }
}
