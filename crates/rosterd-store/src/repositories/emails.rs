//! Email notification repository.
//!
//! Rows enter as PENDING and are driven to SENT / FAILED by the dispatch
//! job; the status transitions live here so the job stays a thin loop.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use rosterd_commons::{EmailKind, EmailNotification, EmailStatus, Page, PageRequest, Result};

/// Payload for enqueueing a notification.
#[derive(Debug, Clone)]
pub struct NewEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub kind: EmailKind,
}

#[derive(Clone)]
pub struct EmailRepository {
    pool: SqlitePool,
}

impl EmailRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Enqueues a notification with status PENDING.
    pub async fn enqueue(&self, new: NewEmail) -> Result<EmailNotification> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO email_notifications (recipient, subject, content, kind, status, attempts, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)
            "#,
        )
        .bind(&new.recipient)
        .bind(&new.subject)
        .bind(&new.content)
        .bind(new.kind)
        .bind(EmailStatus::Pending)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Return the row as stored so timestamps match later reads exactly
        let stored = sqlx::query_as::<_, EmailNotification>(
            "SELECT * FROM email_notifications WHERE id = ?1",
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<Option<EmailNotification>> {
        let row = sqlx::query_as::<_, EmailNotification>(
            "SELECT * FROM email_notifications WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Paged listing, newest first, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<EmailStatus>,
        page: PageRequest,
    ) -> Result<Page<EmailNotification>> {
        match status {
            Some(status) => {
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM email_notifications WHERE status = ?1",
                )
                .bind(status)
                .fetch_one(&self.pool)
                .await?;

                let items = sqlx::query_as::<_, EmailNotification>(
                    r#"
                    SELECT * FROM email_notifications WHERE status = ?1
                    ORDER BY created_at DESC LIMIT ?2 OFFSET ?3
                    "#,
                )
                .bind(status)
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?;

                Ok(Page::new(items, page, total))
            }
            None => {
                let total =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM email_notifications")
                        .fetch_one(&self.pool)
                        .await?;

                let items = sqlx::query_as::<_, EmailNotification>(
                    "SELECT * FROM email_notifications ORDER BY created_at DESC LIMIT ?1 OFFSET ?2",
                )
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?;

                Ok(Page::new(items, page, total))
            }
        }
    }

    /// Fetches up to `limit` deliverable rows (PENDING or RETRYING),
    /// oldest first so the queue drains in order.
    pub async fn fetch_deliverable(&self, limit: i64) -> Result<Vec<EmailNotification>> {
        let rows = sqlx::query_as::<_, EmailNotification>(
            r#"
            SELECT * FROM email_notifications
            WHERE status IN (?1, ?2)
            ORDER BY created_at ASC
            LIMIT ?3
            "#,
        )
        .bind(EmailStatus::Pending)
        .bind(EmailStatus::Retrying)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Marks a notification delivered.
    pub async fn mark_sent(&self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE email_notifications
            SET status = ?1, sent_at = ?2, attempts = attempts + 1, last_error = NULL
            WHERE id = ?3
            "#,
        )
        .bind(EmailStatus::Sent)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Records a failed delivery attempt. The row moves to RETRYING until
    /// `max_attempts` is exhausted, then to FAILED.
    pub async fn record_failure(&self, id: i64, error: &str, max_attempts: i64) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE email_notifications
            SET attempts = attempts + 1,
                last_error = ?1,
                status = CASE WHEN attempts + 1 >= ?2 THEN ?3 ELSE ?4 END
            WHERE id = ?5
            "#,
        )
        .bind(error)
        .bind(max_attempts)
        .bind(EmailStatus::Failed)
        .bind(EmailStatus::Retrying)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of notifications delivered on `date` (UTC). Feeds the daily
    /// rollup.
    pub async fn count_sent_on(&self, date: NaiveDate) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM email_notifications WHERE status = ?1 AND date(sent_at) = ?2",
        )
        .bind(EmailStatus::Sent)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
