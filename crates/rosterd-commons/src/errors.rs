//! Shared error types for rosterd.
//!
//! Every crate in the workspace maps its failures into [`RosterError`] so the
//! API layer can translate them uniformly into HTTP responses.

use thiserror::Error;

/// Common error type for rosterd operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Invalid input provided by a caller (bad parameter, malformed payload)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (user, rollup row, notification)
    #[error("not found: {0}")]
    NotFound(String),

    /// Resource already exists (duplicate creation)
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(String),

    /// Internal error (unexpected state)
    #[error("internal error: {0}")]
    Internal(String),
}

impl RosterError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<sqlx::Error> for RosterError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => Self::NotFound("row not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::AlreadyExists(db.message().to_string())
            }
            _ => Self::Database(e.to_string()),
        }
    }
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, RosterError>;
