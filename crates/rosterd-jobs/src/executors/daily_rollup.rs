//! Daily statistics rollup executor.
//!
//! Recomputes today's counters from the source tables and upserts the
//! unique-date row. Counters with no in-process source (login attempts,
//! executed tasks) are carried forward from the existing row.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use rosterd_store::{DailyCounters, EmailRepository, StatsRepository, UserRepository};

use crate::error::Result;
use crate::executors::{JobExecutor, JobOutcome};

pub struct DailyRollupExecutor {
    users: UserRepository,
    emails: EmailRepository,
    stats: StatsRepository,
}

impl DailyRollupExecutor {
    pub fn new(users: UserRepository, emails: EmailRepository, stats: StatsRepository) -> Self {
        Self { users, emails, stats }
    }
}

#[async_trait]
impl JobExecutor for DailyRollupExecutor {
    fn name(&self) -> &'static str {
        "daily_rollup"
    }

    async fn run(&self) -> Result<JobOutcome> {
        let today = Utc::now().date_naive();

        let existing = self.stats.get_by_date(today).await?;
        let counters = DailyCounters {
            user_registrations: self.users.count_registered_on(today).await?,
            emails_sent: self.emails.count_sent_on(today).await?,
            login_attempts: existing.as_ref().map(|s| s.login_attempts).unwrap_or(0),
            tasks_executed: existing.as_ref().map(|s| s.tasks_executed).unwrap_or(0),
        };

        let row = self.stats.upsert(today, counters).await?;
        debug!(
            "Rollup for {}: {} registrations, {} emails sent",
            row.date, row.user_registrations, row.emails_sent
        );
        Ok(JobOutcome { processed: 1, failed: 0 })
    }
}
