use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Error codes for structured API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required request field is missing or empty
    #[serde(rename = "VALIDATION_ERROR")]
    ValidationError,

    /// Company code did not match any row
    #[serde(rename = "COMPANY_NOT_FOUND")]
    CompanyNotFound,

    /// Invoice id did not match any row
    #[serde(rename = "INVOICE_NOT_FOUND")]
    InvoiceNotFound,

    /// Database connection or query error
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,

    /// Internal server error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError => write!(f, "VALIDATION_ERROR"),
            Self::CompanyNotFound => write!(f, "COMPANY_NOT_FOUND"),
            Self::InvoiceNotFound => write!(f, "INVOICE_NOT_FOUND"),
            Self::DatabaseError => write!(f, "DATABASE_ERROR"),
            Self::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

impl ErrorCode {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError => 400,
            Self::CompanyNotFound => 404,
            Self::InvoiceNotFound => 404,
            Self::DatabaseError => 500,
            Self::InternalError => 500,
        }
    }
}
