//! # Events emitted by the engine during a run.
//!
//! A run produces a strictly ordered stream of [`Event`] records:
//!
//! ```text
//! Status("started")
//! Progress(..), Status(..)      (once per repetition)
//! ...
//! Done(outcome)                 (exactly once, always last)
//! ```
//!
//! Consumers may rely on program order only; arrival timing carries no
//! meaning. After `Done` the stream is closed — nothing follows it.

use std::sync::Arc;

/// Completion fraction reported after one repetition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Bounded run: rounded percentage in `0..=100`.
    Percent(u8),
    /// Unbounded run: completion fraction unknown.
    Indeterminate,
}

impl Progress {
    /// Percent for `done` repetitions out of `total`, rounded to the nearest
    /// integer. Reaches exactly 100 only when `done == total`; intermediate
    /// values are capped at 99 so a large `total` cannot round up early.
    pub fn percent_of(done: u32, total: u32) -> Self {
        debug_assert!(total > 0 && done <= total);
        if done == total {
            return Progress::Percent(100);
        }
        let rounded = (100.0 * f64::from(done) / f64::from(total)).round() as u8;
        Progress::Percent(rounded.min(99))
    }
}

/// Terminal state of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The bounded repeat count was reached.
    Completed,
    /// Cancellation was observed before completion.
    Stopped,
    /// The action backend reported a failure.
    Failed,
}

impl Outcome {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::Completed => "completed",
            Outcome::Stopped => "stopped",
            Outcome::Failed => "failed",
        }
    }
}

/// One record in the engine → controller stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Human-readable status line for the presentation layer.
    Status(Arc<str>),
    /// Completion fraction after one repetition.
    Progress(Progress),
    /// Terminal notification. Exactly one per run, always last.
    Done(Outcome),
}

impl Event {
    /// Creates a status event from any string-ish value.
    pub fn status(text: impl Into<Arc<str>>) -> Self {
        Event::Status(text.into())
    }

    /// Whether this is the terminal event of a run.
    pub fn is_done(&self) -> bool {
        matches!(self, Event::Done(_))
    }
}
