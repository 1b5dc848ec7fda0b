//! Engine internals: cancellation flag, interruptible wait, and the
//! repeat/cancel state machine.
//!
//! Internal modules:
//! - [`cancel`]: the atomically-visible stop signal shared with the controller;
//! - [`wait`]: bounded-granularity interruptible sleep;
//! - [`engine`]: the state machine driving start delay, repetitions, and
//!   event emission.

mod cancel;
mod engine;
mod wait;

pub use cancel::CancelFlag;
pub use engine::{Engine, RunState};
pub use wait::{POLL_GRANULARITY, WaitOutcome, sleep_cancellable, sleep_cancellable_every};
