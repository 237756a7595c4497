//! Live "Updated:" clock shown in the sidebar.
//!
//! The clock is an explicit job: [`ClockService::start`] arms it and returns
//! a [`ClockHandle`], and [`ClockHandle::stop`] tears it down. Only the most
//! recent tick is kept; ticks missed while the runtime was busy are skipped.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// chrono pattern for `MMM DD YYYY HH:mm:ss` (e.g., "Mar 07 2025 14:03:09")
pub const CLOCK_FORMAT: &str = "%b %d %Y %H:%M:%S";

/// Source of the current wall-clock time.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The latest formatted timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockTick {
    pub formatted: String,
}

impl ClockTick {
    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            formatted: time.format(CLOCK_FORMAT).to_string(),
        }
    }

    pub fn now(source: &dyn TimeSource) -> Self {
        Self::at(source.now())
    }
}

pub struct ClockService {
    source: Arc<dyn TimeSource>,
    period: Duration,
}

impl ClockService {
    pub fn new(source: Arc<dyn TimeSource>, period: Duration) -> Self {
        Self { source, period }
    }

    pub fn system(period: Duration) -> Self {
        Self::new(Arc::new(SystemTime), period)
    }

    /// Arm the recurring job. Must be called inside a tokio runtime.
    ///
    /// The first tick is published immediately; the next one after `period`.
    pub fn start(self) -> ClockHandle {
        let (tick_tx, tick_rx) = watch::channel(ClockTick::now(self.source.as_ref()));
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let period = self.period;
        let source = self.source;

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        if tick_tx.send(ClockTick::now(source.as_ref())).is_err() {
                            // Every receiver is gone, nobody is watching
                            break;
                        }
                    }
                }
            }
            debug!("Clock job finished");
        });

        info!("Clock started (every {:?})", period);

        ClockHandle {
            ticks: tick_rx,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }
}

/// Handle to a running clock job.
///
/// Dropping the handle aborts the job as well, so it never outlives its owner.
pub struct ClockHandle {
    ticks: watch::Receiver<ClockTick>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ClockHandle {
    /// A receiver that is notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<ClockTick> {
        self.ticks.clone()
    }

    pub fn latest(&self) -> ClockTick {
        self.ticks.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop future firings and wait for the job to release its schedule.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        info!("Clock stopped");
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
