//! Email notification queue records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category of an outbound notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailKind {
    Welcome,
    PasswordReset,
    Notification,
    General,
}

/// Delivery state of a queued notification.
///
/// Lifecycle (driven by the dispatch job):
/// ```text
/// Pending → Sent
///       ↓
///   Retrying → Sent
///       ↓
///     Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    Pending,
    Sent,
    Failed,
    Retrying,
}

impl EmailStatus {
    /// True for states the dispatcher still has work to do on.
    pub fn is_deliverable(&self) -> bool {
        matches!(self, EmailStatus::Pending | EmailStatus::Retrying)
    }

    /// True for states the dispatcher never revisits.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EmailStatus::Sent | EmailStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Pending => "PENDING",
            EmailStatus::Sent => "SENT",
            EmailStatus::Failed => "FAILED",
            EmailStatus::Retrying => "RETRYING",
        }
    }
}

impl std::str::FromStr for EmailStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(EmailStatus::Pending),
            "SENT" => Ok(EmailStatus::Sent),
            "FAILED" => Ok(EmailStatus::Failed),
            "RETRYING" => Ok(EmailStatus::Retrying),
            other => Err(format!("unknown email status '{}'", other)),
        }
    }
}

/// A queued outbound email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EmailNotification {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub kind: EmailKind,
    pub status: EmailStatus,
    /// Delivery attempts made so far.
    pub attempts: i64,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_classification() {
        assert!(EmailStatus::Pending.is_deliverable());
        assert!(EmailStatus::Retrying.is_deliverable());
        assert!(EmailStatus::Sent.is_terminal());
        assert!(EmailStatus::Failed.is_terminal());
        assert!(!EmailStatus::Sent.is_deliverable());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            EmailStatus::Pending,
            EmailStatus::Sent,
            EmailStatus::Failed,
            EmailStatus::Retrying,
        ] {
            assert_eq!(EmailStatus::from_str(status.as_str()).unwrap(), status);
        }
        assert!(EmailStatus::from_str("BOUNCED").is_err());
    }
}
