//! HTTP error mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use rosterd_commons::RosterError;

/// Wrapper turning [`RosterError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub RosterError);

impl ApiError {
    /// Collapses validator output into a single InvalidInput message.
    pub fn validation(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect::<Vec<_>>()
                    .join(", ");
                if detail.is_empty() {
                    format!("{} is invalid", field)
                } else {
                    format!("{}: {}", field, detail)
                }
            })
            .collect();
        parts.sort();
        ApiError(RosterError::InvalidInput(parts.join("; ")))
    }

    fn code(&self) -> &'static str {
        match self.0 {
            RosterError::InvalidInput(_) => "invalid_input",
            RosterError::NotFound(_) => "not_found",
            RosterError::AlreadyExists(_) => "already_exists",
            RosterError::Configuration(_) => "configuration_error",
            RosterError::Database(_) => "database_error",
            RosterError::Internal(_) => "internal_error",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<RosterError> for ApiError {
    fn from(e: RosterError) -> Self {
        ApiError(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            RosterError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RosterError::NotFound(_) => StatusCode::NOT_FOUND,
            RosterError::AlreadyExists(_) => StatusCode::CONFLICT,
            RosterError::Configuration(_)
            | RosterError::Database(_)
            | RosterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.code(),
            "message": self.0.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError(RosterError::not_found("x")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(RosterError::already_exists("x")).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(RosterError::invalid_input("x")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(RosterError::database("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
