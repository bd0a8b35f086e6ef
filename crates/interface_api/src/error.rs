//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::PortError;
use domain_split::SplitError;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Split(#[from] SplitError),

    #[error("Invalid request body: {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Split(SplitError::MalformedUpstreamData { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Split(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Split(err) => err.kind(),
            ApiError::Validation { .. } => "invalid_input",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Unavailable(_) => "unavailable",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            ApiError::Split(err) => err.field().map(str::to_string),
            ApiError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
            field: self.field(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Conflict { .. } => ApiError::Conflict(err.to_string()),
            _ if err.is_transient() => ApiError::Unavailable(err.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        // Report the first offending field; the client fixes one at a time
        let (field, message) = first_violation(&errors)
            .unwrap_or_else(|| ("body".to_string(), errors.to_string()));
        ApiError::Validation { field, message }
    }
}

/// Walks nested validation errors to the first leaf, building a dotted path
fn first_violation(errors: &ValidationErrors) -> Option<(String, String)> {
    use validator::ValidationErrorsKind;

    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by_key(|(name, _)| name.to_string());

    for (name, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(violations) => {
                if let Some(violation) = violations.first() {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| violation.code.to_string());
                    return Some((name.to_string(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some((path, message)) = first_violation(inner) {
                    return Some((format!("{name}.{path}"), message));
                }
            }
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    if let Some((path, message)) = first_violation(inner) {
                        return Some((format!("{name}[{index}].{path}"), message));
                    }
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_error_statuses() {
        let invalid = ApiError::from(SplitError::invalid_input("party_size", "must be positive"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error_type(), "invalid_input");
        assert_eq!(invalid.field().as_deref(), Some("party_size"));

        let malformed = ApiError::from(SplitError::malformed("items[0].price", "missing"));
        assert_eq!(malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(malformed.error_type(), "malformed_upstream_data");
    }

    #[test]
    fn test_port_error_mapping() {
        let missing = ApiError::from(PortError::not_found("SplitRecord", "RCT-1"));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let down = ApiError::from(PortError::connection("store offline"));
        assert_eq!(down.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
