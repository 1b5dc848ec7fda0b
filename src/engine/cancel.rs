//! # Shared cancellation flag.
//!
//! [`CancelFlag`] is the only piece of state shared between the controlling
//! context and a running engine: the controller writes it, the engine reads
//! it inside [`sleep_cancellable`](crate::sleep_cancellable) and at the loop
//! boundary.
//!
//! ## Memory ordering
//! `set()` stores with `Release` and `is_set()` loads with `Acquire`, so a
//! stop requested on one task is visible to the engine's next flag check on
//! another. Nothing else is published through the flag; the event channel
//! carries all run data.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation signal shared between a controller and one engine.
///
/// Cheap to clone (an `Arc`-backed bool); all clones observe the same flag.
/// Setting is idempotent and may happen from any context, any number of
/// times. The flag is never cleared — each run gets a fresh one.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Creates a new, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent; a no-op once the run is terminal.
    pub fn set(&self) {
        self.inner.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_set(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}
