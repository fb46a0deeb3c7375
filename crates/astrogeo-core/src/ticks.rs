//! Edge triggers for monotonically increasing UI tick counters.

/// Fires once per change of an observed counter.
///
/// The first observation only primes the trigger, so mounting a view with a
/// non-zero counter does not replay an old action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    last: Option<u32>,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primed with `value`; the next `fire(value)` is a no-op.
    pub fn primed(value: u32) -> Self {
        Self { last: Some(value) }
    }

    pub fn fire(&mut self, value: u32) -> bool {
        match self.last.replace(value) {
            Some(previous) => previous != value,
            None => false,
        }
    }

    pub fn last(&self) -> Option<u32> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_on_change() {
        let mut trigger = EdgeTrigger::new();
        assert!(!trigger.fire(3));
        assert!(!trigger.fire(3));
        assert!(trigger.fire(4));
        assert!(!trigger.fire(4));
        assert!(!trigger.fire(4));
        assert!(trigger.fire(5));
    }

    #[test]
    fn primed_trigger_ignores_current_value() {
        let mut trigger = EdgeTrigger::primed(0);
        assert!(!trigger.fire(0));
        assert!(trigger.fire(1));
        assert_eq!(trigger.last(), Some(1));
    }
}
