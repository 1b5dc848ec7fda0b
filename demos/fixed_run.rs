//! # Demo: fixed_run
//!
//! Runs a bounded repeat to completion and prints every event.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Controller::start(payload="hello", every 500ms, 5 times)
//!   │     ├─► Status("started")
//!   │     ├─► Progress(20%) ... Progress(100%)
//!   │     └─► Done(Completed)
//!   └─► wait until the controller goes idle
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example fixed_run
//! ```

use std::sync::Arc;
use std::time::Duration;

use autopaste::{
    ActionError, ActionFn, Config, Controller, Event, LogWriter, RunParams, Subscribe,
};

/// Prints terminal notifications on top of the LogWriter output.
struct DonePrinter;

#[async_trait::async_trait]
impl Subscribe for DonePrinter {
    async fn on_event(&self, event: &Event) {
        if let Event::Done(outcome) = event {
            println!("[demo] run finished: {}", outcome.as_label());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let sink = ActionFn::arc(|payload: String| async move {
        println!("[sink] pasting {payload:?}");
        Ok::<_, ActionError>(())
    });
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter), Arc::new(DonePrinter)];
    let controller = Controller::new(Config::default(), sink, subs);

    let params = RunParams::new("hello", Duration::from_millis(500)).with_repeat_count(5);
    controller.start(params).await?;

    while controller.is_active().await {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    controller.shutdown().await;
    Ok(())
}
