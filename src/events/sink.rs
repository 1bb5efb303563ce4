//! Event delivery.
//!
//! The driver pushes every [`GameEvent`] into an [`EventSink`] as it
//! happens. A sink is where a front end hooks its "state changed" signal.

use super::event::GameEvent;

/// Receives events in the order they happen.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Collects events in memory.
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    pub events: Vec<GameEvent>,
}

impl VecSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl<F: FnMut(GameEvent)> EventSink for F {
    fn emit(&mut self, event: GameEvent) {
        self(event)
    }
}
