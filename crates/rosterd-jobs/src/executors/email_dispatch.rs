//! Email dispatch executor.
//!
//! Drains the notification queue oldest-first. Delivery failures move the
//! row to RETRYING and leave it for the next run; once the attempt cap is
//! exhausted the repository marks it FAILED.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use rosterd_store::EmailRepository;

use crate::error::Result;
use crate::executors::{JobExecutor, JobOutcome};
use crate::sender::EmailSender;
use crate::{DEFAULT_DISPATCH_BATCH_SIZE, DEFAULT_MAX_ATTEMPTS};

pub struct EmailDispatchExecutor {
    emails: EmailRepository,
    sender: Arc<dyn EmailSender>,
    batch_size: i64,
    max_attempts: i64,
}

impl EmailDispatchExecutor {
    pub fn new(emails: EmailRepository, sender: Arc<dyn EmailSender>) -> Self {
        Self {
            emails,
            sender,
            batch_size: DEFAULT_DISPATCH_BATCH_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_limits(mut self, batch_size: i64, max_attempts: i64) -> Self {
        self.batch_size = batch_size;
        self.max_attempts = max_attempts;
        self
    }
}

#[async_trait]
impl JobExecutor for EmailDispatchExecutor {
    fn name(&self) -> &'static str {
        "email_dispatch"
    }

    async fn run(&self) -> Result<JobOutcome> {
        let batch = self.emails.fetch_deliverable(self.batch_size).await?;
        if batch.is_empty() {
            return Ok(JobOutcome::default());
        }
        debug!("Dispatching {} queued notification(s)", batch.len());

        let mut outcome = JobOutcome::default();
        for email in batch {
            match self.sender.send(&email).await {
                Ok(()) => {
                    self.emails.mark_sent(email.id).await?;
                    outcome.processed += 1;
                }
                Err(e) => {
                    warn!(
                        "Delivery failed for notification {} (attempt {}): {}",
                        email.id,
                        email.attempts + 1,
                        e
                    );
                    self.emails
                        .record_failure(email.id, &e.to_string(), self.max_attempts)
                        .await?;
                    outcome.failed += 1;
                }
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobError;
    use rosterd_commons::{EmailKind, EmailNotification, EmailStatus};
    use rosterd_store::{NewEmail, Store};

    struct FailingSender;

    #[async_trait]
    impl EmailSender for FailingSender {
        async fn send(&self, _email: &EmailNotification) -> Result<()> {
            Err(JobError::Send("smtp unreachable".to_string()))
        }
    }

    async fn enqueue(store: &Store, recipient: &str) -> EmailNotification {
        store
            .emails()
            .enqueue(NewEmail {
                recipient: recipient.to_string(),
                subject: "s".to_string(),
                content: "c".to_string(),
                kind: EmailKind::General,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_successful_dispatch_marks_sent() {
        let store = Store::open_in_memory().await.unwrap();
        enqueue(&store, "a@example.com").await;
        enqueue(&store, "b@example.com").await;

        let executor =
            EmailDispatchExecutor::new(store.emails(), Arc::new(crate::LogEmailSender));
        let outcome = executor.run().await.unwrap();
        assert_eq!(outcome.processed, 2);
        assert_eq!(outcome.failed, 0);

        assert!(store.emails().fetch_deliverable(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_dispatch_retries_then_fails() {
        let store = Store::open_in_memory().await.unwrap();
        let queued = enqueue(&store, "c@example.com").await;

        let executor = EmailDispatchExecutor::new(store.emails(), Arc::new(FailingSender))
            .with_limits(10, 2);

        let outcome = executor.run().await.unwrap();
        assert_eq!(outcome.failed, 1);
        let row = store.emails().get(queued.id).await.unwrap().unwrap();
        assert_eq!(row.status, EmailStatus::Retrying);

        executor.run().await.unwrap();
        let row = store.emails().get(queued.id).await.unwrap().unwrap();
        assert_eq!(row.status, EmailStatus::Failed);
        assert_eq!(row.attempts, 2);
        assert_eq!(row.last_error.as_deref(), Some("send failed: smtp unreachable"));

        // Terminal rows are never revisited
        let outcome = executor.run().await.unwrap();
        assert_eq!(outcome, JobOutcome::default());
    }

    #[tokio::test]
    async fn test_batch_size_limits_one_run() {
        let store = Store::open_in_memory().await.unwrap();
        for i in 0..5 {
            enqueue(&store, &format!("u{}@example.com", i)).await;
        }

        let executor = EmailDispatchExecutor::new(store.emails(), Arc::new(crate::LogEmailSender))
            .with_limits(2, 3);
        assert_eq!(executor.run().await.unwrap().processed, 2);
        assert_eq!(store.emails().fetch_deliverable(10).await.unwrap().len(), 3);
    }
}
