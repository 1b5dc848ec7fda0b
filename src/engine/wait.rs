//! # Interruptible wait.
//!
//! A timed sleep that returns early once a [`CancelFlag`] becomes visible.
//! The flag is re-checked at a fixed granularity, so cancellation latency is
//! bounded by that granularity no matter how long the requested duration is.
//!
//! ## Rules
//! - A flag already set before the wait begins returns
//!   [`WaitOutcome::Interrupted`] with zero delay (checked once up front).
//! - The sleep proceeds in chunks of at most the granularity; there is no
//!   busy-spin below it.
//! - Returning `Interrupted` does not consume the flag — callers that defer
//!   the terminal transition to a loop boundary re-observe it there.

use std::time::Duration;

use tokio::time::{self, Instant};

use super::cancel::CancelFlag;

/// Default cancellation polling granularity.
pub const POLL_GRANULARITY: Duration = Duration::from_millis(50);

/// Result of an interruptible wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full duration elapsed without cancellation.
    Completed,
    /// Cancellation became visible before the duration elapsed.
    Interrupted,
}

/// Sleeps for up to `duration`, waking early when `flag` is set.
///
/// Re-checks the flag every [`POLL_GRANULARITY`].
pub async fn sleep_cancellable(duration: Duration, flag: &CancelFlag) -> WaitOutcome {
    sleep_cancellable_every(duration, flag, POLL_GRANULARITY).await
}

/// Sleeps for up to `duration`, re-checking `flag` every `granularity`.
///
/// The granularity is clamped to at least 1ms so a zero value cannot spin.
pub async fn sleep_cancellable_every(
    duration: Duration,
    flag: &CancelFlag,
    granularity: Duration,
) -> WaitOutcome {
    if flag.is_set() {
        return WaitOutcome::Interrupted;
    }

    let granularity = granularity.max(Duration::from_millis(1));
    let deadline = Instant::now() + duration;
    loop {
        let now = Instant::now();
        if now >= deadline {
            return WaitOutcome::Completed;
        }
        time::sleep(granularity.min(deadline - now)).await;
        if flag.is_set() {
            return WaitOutcome::Interrupted;
        }
    }
}
