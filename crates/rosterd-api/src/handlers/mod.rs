//! HTTP handlers, one module per resource.

pub mod emails;
pub mod health;
pub mod stats;
pub mod users;

use actix_web::HttpRequest;

use rosterd_commons::{RosterError, UserId};

use crate::error::ApiError;

/// Header carrying the acting user's id for audit attribution. There is no
/// auth layer; an absent header simply leaves the audit actor unset.
pub const ACTOR_HEADER: &str = "X-Actor-Id";

/// Extracts the audit actor from the request, rejecting malformed ids.
pub(crate) fn actor_from(req: &HttpRequest) -> Result<Option<UserId>, ApiError> {
    match req.headers().get(ACTOR_HEADER) {
        None => Ok(None),
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| RosterError::invalid_input("X-Actor-Id header is not valid UTF-8"))?;
            let id = UserId::try_new(raw).map_err(|e| {
                ApiError::from(RosterError::invalid_input(format!("X-Actor-Id: {}", e)))
            })?;
            Ok(Some(id))
        }
    }
}
