//! Job error types.

use rosterd_commons::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    /// Persistence failure while reading or updating job state
    #[error("store error: {0}")]
    Store(#[from] RosterError),

    /// Delivery failure reported by the email sender
    #[error("send failed: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, JobError>;
