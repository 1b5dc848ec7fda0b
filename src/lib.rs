//! # autopaste
//!
//! **autopaste** is a small library for driving a repeated paste action on a
//! timer: an optional start delay, a bounded or unbounded repeat count, live
//! progress reporting, and cancellation observed within a bounded latency.
//!
//! The core is a cancellable repeating-task engine. Everything around it —
//! how a paste is physically delivered, how settings are stored, how a
//! status line is rendered — is an adapter trait this crate defines but does
//! not implement.
//!
//! ## Architecture
//! ```text
//!      ┌─────────────┐  start(params) / stop()   ┌──────────────────────┐
//!      │ presentation │ ───────────────────────► │      Controller      │
//!      │    layer     │ ◄─── Subscribe::on_event │ (single active run)  │
//!      └─────────────┘      (drain task only)    └───────┬──────────────┘
//!                                                        │ spawn
//!                                                        ▼
//!      ┌─────────────┐      perform(payload)     ┌──────────────────────┐
//!      │ ActionSink  │ ◄──────────────────────── │        Engine        │
//!      │ (backend)   │                           │  WaitingStart        │
//!      └─────────────┘                           │  Running ── loop ──┐ │
//!                                                │  Finished(outcome)◄┘ │
//!                                                └───────┬──────────────┘
//!                                  Status / Progress /   │ EventChannel
//!                                  Done (ordered, SPSC)  ▼
//!                                                ┌──────────────────────┐
//!                                                │  controller drain    │
//!                                                │  task → subscribers  │
//!                                                └──────────────────────┘
//! ```
//!
//! The only state shared across contexts is the [`CancelFlag`] (written by
//! the controller, read by the engine's waits) and the event channel
//! (written by the engine, drained by the controller). Run parameters are
//! immutable for the run's duration.
//!
//! ## Cancellation
//! Stops are cooperative. The engine checks the flag inside
//! [`sleep_cancellable`] at a bounded granularity (default 50ms), so a stop
//! is observed within that bound regardless of how long the configured
//! delays are. An in-progress paste always completes; only the waits are
//! preemptible.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use autopaste::{
//!     ActionError, ActionFn, Config, Controller, LogWriter, RunParams, Subscribe,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = ActionFn::arc(|payload: String| async move {
//!         println!("pasting {payload}");
//!         Ok::<_, ActionError>(())
//!     });
//!     let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
//!     let controller = Controller::new(Config::default(), sink, subs);
//!
//!     let params = RunParams::new("hi", Duration::from_secs(2))
//!         .with_repeat_count(10);
//!     controller.start(params).await?;
//!
//!     tokio::time::sleep(Duration::from_secs(5)).await;
//!     controller.stop().await;
//!     controller.shutdown().await;
//!     Ok(())
//! }
//! ```

mod actions;
mod config;
mod controller;
mod engine;
mod error;
mod events;
mod media;
mod params;
mod settings;
mod subscribers;

// ---- Public re-exports ----

pub use actions::{ActionFn, ActionSink, SinkRef};
pub use config::Config;
pub use controller::Controller;
pub use engine::{
    CancelFlag, Engine, POLL_GRANULARITY, RunState, WaitOutcome, sleep_cancellable,
    sleep_cancellable_every,
};
pub use error::{ActionError, MediaError, SettingsError, StartError};
pub use events::{Event, EventChannel, EventReceiver, Outcome, Progress};
pub use media::{VideoPlayer, VolumeSetter, play_at_full_volume};
pub use params::RunParams;
pub use settings::{Settings, SettingsStore, TomlStore};
pub use subscribers::{LogWriter, Subscribe};
