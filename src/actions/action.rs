//! # Action abstraction.
//!
//! [`ActionSink`] is the seam between the engine and whatever mechanism
//! actually delivers one repetition (clipboard paste plus confirm keystroke,
//! an injected test double, anything). The engine treats it as a black box
//! with exactly this contract: perform once, report success or failure.
//!
//! The common handle type is [`SinkRef`], an `Arc<dyn ActionSink>` suitable
//! for sharing between the controller and its engines.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ActionError;

/// Shared handle to an action backend.
pub type SinkRef = Arc<dyn ActionSink>;

/// Performs one unit of the repeated action.
///
/// ## Contract
/// - One call per repetition; the engine never retries a failed call.
/// - The call is not preemptible: the engine never cancels it once begun,
///   only the waits between calls observe cancellation.
/// - Implementations should return promptly; a long-blocking backend delays
///   cancellation by its own execution time.
#[async_trait]
pub trait ActionSink: Send + Sync + 'static {
    /// Delivers the payload once.
    async fn perform(&self, payload: &str) -> Result<(), ActionError>;
}
