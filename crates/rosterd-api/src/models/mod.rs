//! Request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use rosterd_commons::{Auditable, EmailKind, EmailStatus, User, UserId};

/// Body of `POST /v1/api/users`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Body of `PUT /v1/api/users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// User representation returned by the API: the record plus the audit
/// queries evaluated at response time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub age_in_days: i64,
    pub recently_modified: bool,
    pub modified_after_creation: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let age_in_days = user.age_in_days();
        let recently_modified = user.is_modified_recently_default();
        let modified_after_creation = user.was_modified_after_creation();
        UserResponse {
            full_name: user.full_name(),
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
            created_by: user.created_by,
            updated_by: user.updated_by,
            age_in_days,
            recently_modified,
            modified_after_creation,
        }
    }
}

/// Body of `POST /v1/api/emails`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnqueueEmailRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub recipient: String,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_email_kind")]
    pub kind: EmailKind,
}

fn default_email_kind() -> EmailKind {
    EmailKind::General
}

/// Query parameters of the user listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Substring filter.
    pub q: Option<String>,
}

/// Query parameters of listings that take no filter. Unknown parameters are
/// rejected rather than silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Query parameters of the email listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<EmailStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_validation() {
        let valid = CreateUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = CreateUserRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_username = CreateUserRequest {
            username: String::new(),
            ..valid
        };
        assert!(empty_username.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_absent_fields() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let bad = UpdateUserRequest {
            email: Some("nope".to_string()),
            ..UpdateUserRequest::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_enqueue_defaults_to_general_kind() {
        let req: EnqueueEmailRequest = serde_json::from_value(serde_json::json!({
            "recipient": "a@example.com",
            "subject": "hi"
        }))
        .unwrap();
        assert_eq!(req.kind, EmailKind::General);
        assert!(req.validate().is_ok());
    }
}
