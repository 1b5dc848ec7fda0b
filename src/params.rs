//! Run parameters: what to paste, how often, and how many times.
//!
//! [`RunParams`] is the immutable input of one run. The controller validates
//! it, moves it into the engine, and neither side mutates it afterwards.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use autopaste::RunParams;
//!
//! let params = RunParams::new("hello", Duration::from_secs(2))
//!     .with_start_delay(Duration::from_secs(5))
//!     .with_repeat_count(10);
//!
//! assert!(params.validate().is_ok());
//! assert!(!params.is_unbounded());
//! ```

use std::time::Duration;

use crate::error::StartError;

/// Parameters for one repeating run.
///
/// Immutable once a run starts: [`Controller::start`](crate::Controller::start)
/// moves the params into the engine and no side mutates them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunParams {
    /// Text handed to the [`ActionSink`](crate::ActionSink) on every repetition.
    /// Must be non-empty.
    pub payload: String,
    /// Pause between consecutive repetitions. Must be greater than zero.
    pub iteration_delay: Duration,
    /// Pause before the first repetition. Zero starts immediately.
    pub start_delay: Duration,
    /// Number of repetitions; `0` means repeat until stopped.
    pub repeat_count: u32,
}

impl RunParams {
    /// Creates parameters with no start delay and an unbounded repeat count.
    pub fn new(payload: impl Into<String>, iteration_delay: Duration) -> Self {
        Self {
            payload: payload.into(),
            iteration_delay,
            start_delay: Duration::ZERO,
            repeat_count: 0,
        }
    }

    /// Returns updated parameters with the given start delay.
    pub fn with_start_delay(mut self, start_delay: Duration) -> Self {
        self.start_delay = start_delay;
        self
    }

    /// Returns updated parameters with the given repeat count (`0` = unbounded).
    pub fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Whether the run repeats until stopped.
    pub fn is_unbounded(&self) -> bool {
        self.repeat_count == 0
    }

    /// Checks the parameters before a run is admitted.
    ///
    /// Rejects an empty payload and a zero iteration delay. Called by the
    /// controller before any engine is spawned, so a bad configuration never
    /// produces events.
    pub fn validate(&self) -> Result<(), StartError> {
        if self.payload.is_empty() {
            return Err(StartError::EmptyPayload);
        }
        if self.iteration_delay.is_zero() {
            return Err(StartError::ZeroIterationDelay);
        }
        Ok(())
    }
}
