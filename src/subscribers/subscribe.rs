//! # Event subscriber trait.
//!
//! [`Subscribe`] is the extension point for plugging presentation-layer
//! handlers into the run event stream (status labels, progress bars,
//! logging).
//!
//! ## Rules
//! - Handlers are invoked from the controller's drain task, **never** from
//!   the engine's context, so presentation state is touched by one context
//!   only.
//! - Events arrive in emission order; `Done` is always last.
//! - Handlers run sequentially per event — keep them quick or hand off
//!   internally.

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for run observability.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from the controller's drain task in emission order.
    async fn on_event(&self, event: &Event);
}
