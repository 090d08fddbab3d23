//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                                  │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<Json<T>, ApiError>                                             │
//! │         │                                                               │
//! │         ├── JsonRejection          → 400 VALIDATION_ERROR              │
//! │         ├── ValidationError        → 400 VALIDATION_ERROR              │
//! │         ├── ProductNotFound        → 404 NOT_FOUND                     │
//! │         ├── InsufficientStock      → 422 INSUFFICIENT_STOCK            │
//! │         ├── AmountOutOfRange       → 500 STORAGE_ERROR (logged)        │
//! │         └── StoreError::Io/Parse   → 500 STORAGE_ERROR (logged)        │
//! │                                                                         │
//! │  Body: { "code": "NOT_FOUND", "message": "Product not found: 7" }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures keep their detail in the log and return a generic
//! message; file paths never reach the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tally_core::{CoreError, ValidationError};
use tally_store::StoreError;

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed body or invalid field (400)
    ValidationError,

    /// Unknown product (404)
    NotFound,

    /// Exit larger than current stock (422)
    InsufficientStock,

    /// Data file unreadable, malformed or unwritable (500)
    StorageError,
}

impl ErrorCode {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InsufficientStock => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
            CoreError::AmountOutOfRange { .. } => {
                // The sales file holds totals we cannot represent
                tracing::error!(error = %err, "Commission report failed");
                ApiError::new(ErrorCode::StorageError, "Sales data out of range")
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => e.into(),
            StoreError::Io { .. }
            | StoreError::Parse { .. }
            | StoreError::Serialize(_)
            | StoreError::Task(_) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "Storage operation failed");
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound(5).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError = CoreError::InsufficientStock {
            product_code: 1,
            available: 2,
            requested: 3,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantidade".into(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "quantidade must be positive");
    }

    #[test]
    fn test_out_of_range_totals_are_server_errors() {
        let err: ApiError = StoreError::Domain(CoreError::AmountOutOfRange {
            salesperson: "Ana".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let err: ApiError = StoreError::io(
            "/secret/path/estoque.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("/secret"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "VALIDATION_ERROR", "message": "bad"}));
    }
}
