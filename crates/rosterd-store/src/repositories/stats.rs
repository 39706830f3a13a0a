//! Daily statistics repository.
//!
//! One row per calendar date, enforced by the UNIQUE constraint; writes go
//! through an upsert so re-running a rollup refreshes the existing row.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use rosterd_commons::{DailyStatistics, Page, PageRequest, Result};

/// Counter values for one date, as computed by the rollup job.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyCounters {
    pub user_registrations: i64,
    pub emails_sent: i64,
    pub login_attempts: i64,
    pub tasks_executed: i64,
}

#[derive(Clone)]
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts or refreshes the rollup row for `date`.
    pub async fn upsert(&self, date: NaiveDate, counters: DailyCounters) -> Result<DailyStatistics> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO daily_statistics
                (date, user_registrations, emails_sent, login_attempts, tasks_executed, generated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(date) DO UPDATE SET
                user_registrations = excluded.user_registrations,
                emails_sent = excluded.emails_sent,
                login_attempts = excluded.login_attempts,
                tasks_executed = excluded.tasks_executed,
                generated_at = excluded.generated_at
            "#,
        )
        .bind(date)
        .bind(counters.user_registrations)
        .bind(counters.emails_sent)
        .bind(counters.login_attempts)
        .bind(counters.tasks_executed)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query_as::<_, DailyStatistics>(
            "SELECT * FROM daily_statistics WHERE date = ?1",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Option<DailyStatistics>> {
        let row = sqlx::query_as::<_, DailyStatistics>(
            "SELECT * FROM daily_statistics WHERE date = ?1",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Paged listing, newest date first.
    pub async fn list(&self, page: PageRequest) -> Result<Page<DailyStatistics>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM daily_statistics")
            .fetch_one(&self.pool)
            .await?;

        let items = sqlx::query_as::<_, DailyStatistics>(
            "SELECT * FROM daily_statistics ORDER BY date DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(items, page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;

    #[tokio::test]
    async fn test_upsert_is_idempotent_per_date() {
        let store = Store::open_in_memory().await.unwrap();
        let repo = store.stats();
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();

        let first = repo
            .upsert(date, DailyCounters { user_registrations: 3, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(first.user_registrations, 3);

        // Second rollup for the same date replaces counters, not the row
        let second = repo
            .upsert(date, DailyCounters { user_registrations: 5, emails_sent: 2, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.user_registrations, 5);
        assert_eq!(second.emails_sent, 2);
        assert!(second.generated_at >= first.generated_at);

        let page = repo.list(PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_list_orders_newest_date_first() {
        let store = Store::open_in_memory().await.unwrap();
        let repo = store.stats();

        for day in 1..=3 {
            let date = NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
            repo.upsert(date, DailyCounters::default()).await.unwrap();
        }

        let page = repo.list(PageRequest::default()).await.unwrap();
        assert_eq!(page.items[0].date, NaiveDate::from_ymd_opt(2026, 8, 3).unwrap());
        assert_eq!(page.items[2].date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    }

    #[tokio::test]
    async fn test_get_by_date_missing_is_none() {
        let store = Store::open_in_memory().await.unwrap();
        let missing = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert!(store.stats().get_by_date(missing).await.unwrap().is_none());
    }
}
