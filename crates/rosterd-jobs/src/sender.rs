//! Outbound email transport seam.
//!
//! The dispatcher only talks to this trait; production wiring installs the
//! logging sender (no SMTP transport is in scope), tests install failing or
//! recording fakes.

use async_trait::async_trait;
use log::info;

use rosterd_commons::EmailNotification;

use crate::error::Result;

/// Delivers one notification.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &EmailNotification) -> Result<()>;
}

/// Sender that records the delivery in the log and reports success.
#[derive(Debug, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, email: &EmailNotification) -> Result<()> {
        info!(
            "Email sent: id={} kind={:?} to={} subject={:?}",
            email.id, email.kind, email.recipient, email.subject
        );
        Ok(())
    }
}
