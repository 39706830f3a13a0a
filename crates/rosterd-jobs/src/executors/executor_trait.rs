//! Common executor interface.

use async_trait::async_trait;

use crate::error::Result;

/// Summary of one executor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobOutcome {
    /// Items handled this run (emails dispatched, rows rolled up).
    pub processed: u64,
    /// Items that failed this run (the run itself still succeeds).
    pub failed: u64,
}

/// A unit of background work the scheduler drives on an interval.
#[async_trait]
pub trait JobExecutor: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Performs one run. Item-level failures are absorbed into the outcome;
    /// an `Err` means the run could not proceed at all (e.g. store down).
    async fn run(&self) -> Result<JobOutcome>;
}
