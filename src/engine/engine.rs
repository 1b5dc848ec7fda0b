//! # Engine: the repeating-action state machine.
//!
//! Runs one repeat/cancel lifecycle to a terminal state, emitting the event
//! stream along the way. All blocking happens on the engine's own spawned
//! task; the controlling context never waits on engine internals.
//!
//! ## Event flow
//! ```text
//! Engine::run()
//!   ├─► WaitingStart: sleep(start_delay, cancellable)
//!   │       └─ interrupted ──► Done(Stopped)            (zero actions)
//!   ├─► Status("started")
//!   └─► Running, loop:
//!         ├─► cancel set?           ──► Done(Stopped)
//!         ├─► sink.perform(payload)
//!         │       └─ Err ──► Status(detail) ──► Done(Failed)
//!         ├─► Progress(percent | indeterminate)
//!         ├─► Status(count summary)
//!         ├─► bounded && count == total ──► Done(Completed)   (no trailing wait)
//!         └─► sleep(iteration_delay, cancellable)
//!               └─ interrupted: terminal transition happens at the
//!                  next loop-top check, not mid-wait
//! ```
//!
//! ## Rules
//! - Cancellation is cooperative: only the waits observe it. An in-progress
//!   action always completes before the terminal check.
//! - Exactly one `Done` per run, always last; the channel closes right after
//!   because `run()` consumes the engine and drops the sender.
//! - `run()` takes `self` by value — an engine cannot be run twice.

use std::time::Duration;

use crate::actions::SinkRef;
use crate::events::{Event, EventChannel, Outcome, Progress};
use crate::params::RunParams;

use super::cancel::CancelFlag;
use super::wait::{WaitOutcome, sleep_cancellable_every, POLL_GRANULARITY};

/// Lifecycle of one run.
///
/// `Idle → WaitingStart → Running → Finished(outcome)`; terminal states are
/// final and never re-entered. "Stopping" is not a state — it is the
/// transient condition of the cancel flag being set but the loop boundary
/// not yet reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Created, not yet running.
    Idle,
    /// Sleeping through the start delay.
    WaitingStart,
    /// Executing the repeat loop.
    Running,
    /// Reached a terminal state.
    Finished(Outcome),
}

impl RunState {
    /// Whether the run has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Finished(_))
    }
}

/// The repeat/cancel state machine for a single run.
///
/// Construct with [`Engine::new`], keep a [`CancelFlag`] clone for stopping,
/// then spawn [`Engine::run`] on its own task.
pub struct Engine {
    params: RunParams,
    sink: SinkRef,
    events: EventChannel,
    cancel: CancelFlag,
    granularity: Duration,
    state: RunState,
}

impl Engine {
    /// Creates an engine for one run.
    pub fn new(params: RunParams, sink: SinkRef, events: EventChannel, cancel: CancelFlag) -> Self {
        Self {
            params,
            sink,
            events,
            cancel,
            granularity: POLL_GRANULARITY,
            state: RunState::Idle,
        }
    }

    /// Overrides the cancellation polling granularity for this run.
    pub fn with_granularity(mut self, granularity: Duration) -> Self {
        self.granularity = granularity;
        self
    }

    /// Returns a handle that requests cancellation of this run.
    ///
    /// Idempotent, callable from any context; a no-op once the run is
    /// terminal.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Current lifecycle state. Only meaningful before [`Engine::run`]
    /// consumes the engine; afterwards the event stream is the source of
    /// truth.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Executes the state machine to a terminal state.
    ///
    /// Consumes the engine, emits the event stream, and returns the terminal
    /// outcome (also carried by the final `Done` event).
    pub async fn run(mut self) -> Outcome {
        self.state = RunState::WaitingStart;
        let start = sleep_cancellable_every(self.params.start_delay, &self.cancel, self.granularity);
        if start.await == WaitOutcome::Interrupted {
            return self.finish(Outcome::Stopped);
        }

        self.events.emit(Event::status("started"));
        self.state = RunState::Running;

        let total = self.params.repeat_count;
        let mut done: u32 = 0;
        loop {
            if self.cancel.is_set() {
                return self.finish(Outcome::Stopped);
            }

            if let Err(err) = self.sink.perform(&self.params.payload).await {
                self.events.emit(Event::status(format!("paste failed: {err}")));
                return self.finish(Outcome::Failed);
            }

            done += 1;
            self.events.emit(Event::Progress(progress(done, total)));
            self.events.emit(Event::status(summary(done, total)));

            if total != 0 && done == total {
                return self.finish(Outcome::Completed);
            }

            // An interrupt here returns promptly but the terminal transition
            // belongs to the loop-top check above.
            let _ = sleep_cancellable_every(self.params.iteration_delay, &self.cancel, self.granularity)
                .await;
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        debug_assert!(!self.state.is_terminal(), "terminal state re-entered");
        self.state = RunState::Finished(outcome);
        self.events.emit(Event::Done(outcome));
        outcome
    }
}

fn progress(done: u32, total: u32) -> Progress {
    if total == 0 {
        Progress::Indeterminate
    } else {
        Progress::percent_of(done, total)
    }
}

fn summary(done: u32, total: u32) -> String {
    if total == 0 {
        format!("pasted {done}")
    } else {
        format!("pasted {done} of {total}")
    }
}
