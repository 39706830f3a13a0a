//! Daily rollup counters, one row per calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Aggregate counters for a single calendar date.
///
/// `date` is unique; the rollup job upserts rather than inserting duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DailyStatistics {
    pub id: i64,
    pub date: NaiveDate,
    pub user_registrations: i64,
    pub emails_sent: i64,
    pub login_attempts: i64,
    pub tasks_executed: i64,
    pub generated_at: DateTime<Utc>,
}

impl DailyStatistics {
    /// True when every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.user_registrations == 0
            && self.emails_sent == 0
            && self.login_attempts == 0
            && self.tasks_executed == 0
    }
}
