//! Interval scheduler.
//!
//! One tokio task per registered executor. Each loop ticks on its own
//! interval and exits when the shutdown watch channel flips, so graceful
//! shutdown never interrupts a run mid-flight.

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::executors::JobExecutor;

struct ScheduledJob {
    executor: Arc<dyn JobExecutor>,
    interval: Duration,
}

/// Owns the background job tasks for the lifetime of the server.
pub struct JobScheduler {
    jobs: Vec<ScheduledJob>,
    handles: Vec<JoinHandle<()>>,
    shutdown_tx: watch::Sender<bool>,
}

impl JobScheduler {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            jobs: Vec::new(),
            handles: Vec::new(),
            shutdown_tx,
        }
    }

    /// Registers an executor to run every `interval`. Must be called before
    /// [`Self::start`].
    pub fn register(&mut self, executor: Arc<dyn JobExecutor>, interval: Duration) {
        self.jobs.push(ScheduledJob { executor, interval });
    }

    /// Spawns one loop per registered executor. The first run happens after
    /// one full interval, not immediately, so startup stays cheap.
    pub fn start(&mut self) {
        for job in self.jobs.drain(..) {
            let mut shutdown_rx = self.shutdown_tx.subscribe();
            let executor = job.executor;
            let period = job.interval;

            let handle = tokio::spawn(async move {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
                // interval() fires immediately; consume the first tick
                ticker.tick().await;

                info!("Job '{}' scheduled every {:?}", executor.name(), period);
                loop {
                    tokio::select! {
                        _ = ticker.tick() => {
                            match executor.run().await {
                                Ok(outcome) => {
                                    if outcome.processed > 0 || outcome.failed > 0 {
                                        info!(
                                            "Job '{}' finished: {} processed, {} failed",
                                            executor.name(), outcome.processed, outcome.failed
                                        );
                                    }
                                }
                                Err(e) => {
                                    error!("Job '{}' run failed: {}", executor.name(), e);
                                }
                            }
                        }
                        _ = shutdown_rx.changed() => {
                            info!("Job '{}' stopping", executor.name());
                            break;
                        }
                    }
                }
            });
            self.handles.push(handle);
        }
    }

    /// Signals all loops to stop and waits for them to exit.
    pub async fn shutdown(mut self) {
        if self.shutdown_tx.send(true).is_err() {
            warn!("Job scheduler shutdown: no active jobs to signal");
        }
        for handle in self.handles.drain(..) {
            let _ = handle.await;
        }
    }
}

impl Default for JobScheduler {
    fn default() -> Self {
        Self::new()
    }
}
