//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::audit::Auditable;
use crate::models::UserId;

/// A roster member. Target of search and pagination queries.
///
/// Audit columns (`created_at`, `updated_at`, `created_by`, `updated_by`) are
/// populated by the store's write path, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
}

impl User {
    /// Full display name, `"first last"` with empty parts trimmed away.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Auditable for User {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn created_by(&self) -> Option<&UserId> {
        self.created_by.as_ref()
    }

    fn updated_by(&self) -> Option<&UserId> {
        self.updated_by.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: UserId::new("u1"),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            created_at: None,
            updated_at: None,
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Alice Smith");

        let mut u = sample();
        u.last_name = String::new();
        assert_eq!(u.full_name(), "Alice");
    }
}
