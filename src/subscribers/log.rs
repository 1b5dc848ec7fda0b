//! # Logging subscriber.
//!
//! [`LogWriter`] forwards every run event to [`tracing`] in a compact
//! human-readable form. Useful for development and the demo binaries;
//! implement a custom [`Subscribe`](crate::Subscribe) for anything richer.
//!
//! ## Output shape
//! ```text
//! status: started
//! progress: 33%
//! progress: running
//! run finished outcome=stopped
//! ```

use async_trait::async_trait;
use tracing::info;

use crate::events::{Event, Progress};

use super::subscribe::Subscribe;

/// Subscriber that logs every event through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, event: &Event) {
        match event {
            Event::Status(text) => info!("status: {text}"),
            Event::Progress(Progress::Percent(p)) => info!("progress: {p}%"),
            Event::Progress(Progress::Indeterminate) => info!("progress: running"),
            Event::Done(outcome) => info!(outcome = outcome.as_label(), "run finished"),
        }
    }
}
