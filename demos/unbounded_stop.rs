//! # Demo: unbounded_stop
//!
//! Starts an unbounded run, stops it after two seconds, and persists the
//! parameters so the next session can offer them back.
//!
//! ## Run
//! ```bash
//! cargo run --example unbounded_stop
//! ```

use std::sync::Arc;
use std::time::Duration;

use autopaste::{
    ActionError, ActionFn, Config, Controller, LogWriter, RunParams, Settings, SettingsStore,
    Subscribe, TomlStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let sink = ActionFn::arc(|payload: String| async move {
        println!("[sink] pasting {payload:?}");
        Ok::<_, ActionError>(())
    });
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let controller = Controller::new(Config::default(), sink, subs);

    let params = RunParams::new("spam", Duration::from_millis(400))
        .with_start_delay(Duration::from_millis(800));
    controller.start(params.clone()).await?;

    println!("[demo] running unbounded; stopping in 2s...");
    tokio::time::sleep(Duration::from_secs(2)).await;
    controller.stop().await;
    controller.shutdown().await;

    // Remember the last-used parameters the way a settings dialog would.
    let store = TomlStore::new(std::env::temp_dir().join("autopaste-demo.toml"));
    store.save(&Settings::from_params(&params, false))?;
    println!("[demo] settings saved: {:?}", store.load()?);
    Ok(())
}
