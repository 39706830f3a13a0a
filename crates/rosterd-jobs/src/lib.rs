//! # rosterd-jobs
//!
//! Background job system for rosterd.
//!
//! This crate manages the asynchronous work the HTTP surface only records:
//! - **EmailDispatchExecutor**: drains the notification queue
//!   (PENDING/RETRYING rows) through an [`EmailSender`]
//! - **DailyRollupExecutor**: refreshes the per-date counter row in
//!   `daily_statistics`
//!
//! ## Job lifecycle (email dispatch)
//! ```text
//! Pending → Sent
//!       ↓
//!   Retrying → Sent
//!       ↓  (attempts exhausted, 3× default)
//!     Failed
//! ```
//!
//! Executors implement [`JobExecutor`] and are driven by the
//! [`JobScheduler`], one tokio interval loop per executor, stopped through a
//! watch channel during graceful shutdown.

pub mod error;
pub mod executors;
pub mod scheduler;
pub mod sender;

pub use error::{JobError, Result};
pub use executors::{DailyRollupExecutor, EmailDispatchExecutor, JobExecutor, JobOutcome};
pub use scheduler::JobScheduler;
pub use sender::{EmailSender, LogEmailSender};

/// Default cap on delivery attempts before a notification is marked FAILED.
pub const DEFAULT_MAX_ATTEMPTS: i64 = 3;

/// Default number of queue rows handled per dispatch run.
pub const DEFAULT_DISPATCH_BATCH_SIZE: i64 = 50;
