//! Controller internals: single-active-run lifecycle and event fan-out.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::warn;

use crate::actions::SinkRef;
use crate::config::Config;
use crate::engine::{CancelFlag, Engine};
use crate::error::StartError;
use crate::events::{EventChannel, EventReceiver, Outcome};
use crate::params::RunParams;
use crate::subscribers::Subscribe;

/// Handles to one spawned run.
struct ActiveRun {
    cancel: CancelFlag,
    engine: JoinHandle<Outcome>,
    drain: JoinHandle<()>,
    /// Set by the drain task once `Done` has been forwarded and the stream
    /// closed.
    finished: Arc<AtomicBool>,
}

impl ActiveRun {
    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

/// Starts and stops runs, enforcing at most one active engine at a time.
///
/// The controller spawns each engine on its own task, drains the engine's
/// event channel on a second task, and fans events out to the registered
/// [`Subscribe`] impls in emission order. Subscribers are never invoked from
/// the engine's context.
///
/// ## Lifecycle
/// ```text
/// start(params)
///   ├─► validate params            (reject: no state change, no events)
///   ├─► previous run still live?   (reject: AlreadyActive)
///   ├─► previous run finished?     (join it, bounded by Config::join_grace)
///   └─► spawn Engine::run + drain task
///
/// stop() ──► CancelFlag::set()     (observed within one poll granularity)
///
/// shutdown() ──► stop + bounded join
///   └─ join grace exceeded ──► warn + abandon the handle (never hangs)
/// ```
pub struct Controller {
    cfg: Config,
    sink: SinkRef,
    subscribers: Arc<[Arc<dyn Subscribe>]>,
    active: Mutex<Option<ActiveRun>>,
}

impl Controller {
    /// Creates a controller that runs engines against `sink` and delivers
    /// events to `subscribers`.
    pub fn new(cfg: Config, sink: SinkRef, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        Self {
            cfg,
            sink,
            subscribers: subscribers.into(),
            active: Mutex::new(None),
        }
    }

    /// Starts a new run.
    ///
    /// Rejects invalid parameters and concurrent runs without any state
    /// change — no engine is spawned and the event stream stays silent. A
    /// previous finished run is joined (bounded by [`Config::join_grace`])
    /// before the new one is admitted.
    pub async fn start(&self, params: RunParams) -> Result<(), StartError> {
        params.validate()?;

        let mut active = self.active.lock().await;
        if let Some(run) = active.take() {
            if !run.is_finished() {
                *active = Some(run);
                return Err(StartError::AlreadyActive);
            }
            self.reap(run).await;
        }

        let cancel = CancelFlag::new();
        let (tx, rx) = EventChannel::new();
        let engine = Engine::new(params, self.sink.clone(), tx, cancel.clone())
            .with_granularity(self.cfg.poll_granularity);

        let finished = Arc::new(AtomicBool::new(false));
        let drain = tokio::spawn(drain_events(
            rx,
            self.subscribers.clone(),
            finished.clone(),
        ));
        let engine = tokio::spawn(engine.run());

        *active = Some(ActiveRun {
            cancel,
            engine,
            drain,
            finished,
        });
        Ok(())
    }

    /// Requests cancellation of the active run. No-op when idle.
    ///
    /// The engine observes the signal within one poll granularity; any
    /// in-progress action completes first.
    pub async fn stop(&self) {
        if let Some(run) = self.active.lock().await.as_ref() {
            run.cancel.set();
        }
    }

    /// Whether a run is currently live (its `Done` not yet delivered).
    pub async fn is_active(&self) -> bool {
        match self.active.lock().await.as_ref() {
            Some(run) => !run.is_finished(),
            None => false,
        }
    }

    /// Stops the active run, if any, and joins it within the grace bound.
    ///
    /// For process-exit paths. Never hangs: a stuck engine is abandoned with
    /// a logged warning after [`Config::join_grace`].
    pub async fn shutdown(&self) {
        let run = self.active.lock().await.take();
        if let Some(run) = run {
            run.cancel.set();
            self.reap(run).await;
        }
    }

    /// Joins both run tasks, bounded by the configured grace.
    async fn reap(&self, run: ActiveRun) {
        let grace = self.cfg.join_grace;
        if time::timeout(grace, run.engine).await.is_err() {
            warn!(
                grace_ms = grace.as_millis() as u64,
                "engine task did not exit within the join grace; abandoning join"
            );
        }
        if time::timeout(grace, run.drain).await.is_err() {
            warn!(
                grace_ms = grace.as_millis() as u64,
                "event drain task did not exit within the join grace; abandoning join"
            );
        }
    }
}

/// Forwards events to subscribers in emission order, then marks the run
/// finished. The loop ends when the engine drops its sender, which happens
/// right after `Done`.
async fn drain_events(
    mut rx: EventReceiver,
    subscribers: Arc<[Arc<dyn Subscribe>]>,
    finished: Arc<AtomicBool>,
) {
    while let Some(event) = rx.recv().await {
        for sub in subscribers.iter() {
            sub.on_event(&event).await;
        }
    }
    finished.store(true, Ordering::Release);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::actions::ActionSink;
    use crate::error::ActionError;
    use crate::events::{Event, Progress};

    use super::*;

    struct CountingSink {
        calls: AtomicU32,
    }

    impl CountingSink {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ActionSink for CountingSink {
        async fn perform(&self, _payload: &str) -> Result<(), ActionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: StdMutex<Vec<Event>>,
    }

    impl Recorder {
        fn arc() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &Event) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn controller_with(sink: SinkRef, recorder: Arc<Recorder>) -> Controller {
        let mut cfg = Config::default();
        cfg.poll_granularity = Duration::from_millis(5);
        Controller::new(cfg, sink, vec![recorder])
    }

    async fn wait_idle(controller: &Controller) {
        for _ in 0..400 {
            if !controller.is_active().await {
                return;
            }
            time::sleep(Duration::from_millis(5)).await;
        }
        panic!("controller still active");
    }

    #[tokio::test]
    async fn test_start_rejects_invalid_params_without_events() {
        let recorder = Recorder::arc();
        let controller = controller_with(CountingSink::arc(), recorder.clone());

        let empty = RunParams::new("", Duration::from_millis(10));
        assert_eq!(
            controller.start(empty).await,
            Err(StartError::EmptyPayload)
        );
        let spinning = RunParams::new("hi", Duration::ZERO);
        assert_eq!(
            controller.start(spinning).await,
            Err(StartError::ZeroIterationDelay)
        );

        assert!(!controller.is_active().await);
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_start_rejects_while_a_run_is_active() {
        let sink = CountingSink::arc();
        let recorder = Recorder::arc();
        let controller = controller_with(sink, recorder.clone());

        let params = RunParams::new("hi", Duration::from_millis(50));
        controller.start(params.clone()).await.unwrap();
        assert!(controller.is_active().await);

        assert_eq!(
            controller.start(params).await,
            Err(StartError::AlreadyActive)
        );

        controller.shutdown().await;
        assert!(!controller.is_active().await);

        // The rejected start spawned no second engine: one run, one "started".
        let started = recorder
            .events()
            .iter()
            .filter(|ev| **ev == Event::status("started"))
            .count();
        assert_eq!(started, 1);
    }

    #[tokio::test]
    async fn test_events_arrive_in_order_with_done_last() {
        let sink = CountingSink::arc();
        let recorder = Recorder::arc();
        let controller = controller_with(sink.clone(), recorder.clone());

        let params = RunParams::new("hi", Duration::from_millis(5)).with_repeat_count(2);
        controller.start(params).await.unwrap();
        wait_idle(&controller).await;

        let events = recorder.events();
        assert_eq!(events.first(), Some(&Event::status("started")));
        assert_eq!(events.last(), Some(&Event::Done(Outcome::Completed)));
        assert_eq!(events.iter().filter(|ev| ev.is_done()).count(), 1);
        assert_eq!(sink.calls(), 2);
    }

    #[tokio::test]
    async fn test_restart_is_admitted_after_completion() {
        let sink = CountingSink::arc();
        let recorder = Recorder::arc();
        let controller = controller_with(sink.clone(), recorder.clone());

        let params = RunParams::new("hi", Duration::from_millis(5)).with_repeat_count(1);
        controller.start(params.clone()).await.unwrap();
        wait_idle(&controller).await;

        controller.start(params).await.unwrap();
        wait_idle(&controller).await;

        assert_eq!(sink.calls(), 2);
        let dones = recorder
            .events()
            .iter()
            .filter(|ev| ev.is_done())
            .count();
        assert_eq!(dones, 2, "one Done per run");
    }

    #[tokio::test]
    async fn test_stop_is_a_noop_when_idle() {
        let controller = controller_with(CountingSink::arc(), Recorder::arc());
        controller.stop().await;
        assert!(!controller.is_active().await);
    }

    #[tokio::test]
    async fn test_stop_halts_unbounded_run() {
        let sink = CountingSink::arc();
        let recorder = Recorder::arc();
        let controller = controller_with(sink.clone(), recorder.clone());

        controller
            .start(RunParams::new("hi", Duration::from_millis(20)))
            .await
            .unwrap();
        time::sleep(Duration::from_millis(70)).await;
        controller.stop().await;
        wait_idle(&controller).await;

        let events = recorder.events();
        assert_eq!(events.last(), Some(&Event::Done(Outcome::Stopped)));
        assert!(!events.contains(&Event::Done(Outcome::Completed)));
        assert!(
            events
                .iter()
                .all(|ev| !matches!(ev, Event::Progress(Progress::Percent(_)))),
            "unbounded runs report indeterminate progress only"
        );
        let performed = sink.calls();
        assert!(performed >= 1, "at least the first repetition ran");
        // No further actions after the stop was observed.
        time::sleep(Duration::from_millis(60)).await;
        assert_eq!(sink.calls(), performed);
    }

    #[tokio::test]
    async fn test_shutdown_joins_and_clears_the_run() {
        let controller = controller_with(CountingSink::arc(), Recorder::arc());
        controller
            .start(RunParams::new("hi", Duration::from_millis(10)))
            .await
            .unwrap();
        controller.shutdown().await;
        assert!(!controller.is_active().await);
        // Idempotent on an empty slot.
        controller.shutdown().await;
    }
}
