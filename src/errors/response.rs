use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::codes::ErrorCode;

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing
    pub request_id: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code,
                message: message.into(),
                request_id: Uuid::new_v4().to_string(),
            },
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.code.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}

/// Helpers for creating common errors
impl ErrorResponse {
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn company_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CompanyNotFound, message)
    }

    pub fn invoice_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvoiceNotFound, message)
    }

    pub fn database_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Single translation point for unexpected failures. Deliberate 400/404
/// responses are constructed explicitly in the handlers; everything else
/// (storage connectivity loss, malformed rows) funnels through here.
impl From<anyhow::Error> for ErrorResponse {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Unexpected error: {err:#}");
        Self::database_error(format!("Database error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let err = ErrorResponse::new(ErrorCode::ValidationError, "Company name is required");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("VALIDATION_ERROR"));
        assert!(json.contains("Company name is required"));
        assert!(json.contains("request_id"));
    }

    #[test]
    fn test_error_code_status_codes() {
        assert_eq!(ErrorCode::ValidationError.status_code(), 400);
        assert_eq!(ErrorCode::CompanyNotFound.status_code(), 404);
        assert_eq!(ErrorCode::InvoiceNotFound.status_code(), 404);
        assert_eq!(ErrorCode::DatabaseError.status_code(), 500);
        assert_eq!(ErrorCode::InternalError.status_code(), 500);
    }

    #[test]
    fn test_into_response_status_validation_error() {
        let error = ErrorResponse::validation_error("Please provide an amount");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_status_not_found() {
        let error = ErrorResponse::company_not_found("Company gogl is not found");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_status_internal_error() {
        let error = ErrorResponse::internal_error("Something went wrong");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_anyhow_maps_to_database_error() {
        let err: ErrorResponse = anyhow::anyhow!("connection refused").into();
        assert_eq!(err.error.code, ErrorCode::DatabaseError);
        assert!(err.error.message.contains("connection refused"));
    }
}
