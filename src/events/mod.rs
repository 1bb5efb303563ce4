//! Driver events and the sinks that receive them.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, NullSink, VecSink};
