//! Job executors.

pub mod daily_rollup;
pub mod email_dispatch;
pub mod executor_trait;

pub use daily_rollup::DailyRollupExecutor;
pub use email_dispatch::EmailDispatchExecutor;
pub use executor_trait::{JobExecutor, JobOutcome};
