//! # Ordered event channel (engine → controller).
//!
//! [`EventChannel`] is a thin wrapper around an unbounded
//! [`tokio::sync::mpsc`] sender: single producer (the engine), single
//! consumer (the controller's drain task).
//!
//! ## Rules
//! - **Ordered**: events arrive in exactly the order emitted.
//! - **Lossless**: the channel is unbounded; nothing is dropped or reordered.
//! - **Non-blocking emit**: `emit()` never waits; a closed receiver makes it
//!   a no-op (the run is being abandoned, nobody is listening).
//! - **Closes after `Done`**: the engine owns the only sender and drops it
//!   when `run()` returns, so the receiver sees `None` right after the
//!   terminal event.

use tokio::sync::mpsc;

use super::event::Event;

/// Receiving half of the event stream, drained by the controller.
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

/// Sending half of the event stream, owned by the engine.
///
/// Deliberately not `Clone`: the ordering guarantee rests on there being a
/// single producer.
#[derive(Debug)]
pub struct EventChannel {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventChannel {
    /// Creates a connected channel pair.
    pub fn new() -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emits an event. Never blocks; dropped silently if the receiver is gone.
    pub fn emit(&self, event: Event) {
        let _ = self.tx.send(event);
    }
}
