//! Error handling for the Cafe Stock Ledger
//!
//! Every failure is scoped to the operation that raised it. Caller errors
//! (`InvalidReading`, `NotFound`, `DuplicateReading`) have no side effects;
//! storage errors roll back the write that hit them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{CatalogError, ReadingViolation, StockKind};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Caller errors
    #[error("Invalid reading: {0}")]
    InvalidReading(#[from] ReadingViolation),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate {kind} reading for {key}")]
    DuplicateReading { kind: StockKind, key: String },

    // Persistence errors
    #[error("Storage error: {0}")]
    StorageError(#[from] sqlx::Error),

    // Startup errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error was caused by the request rather than the system
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidReading(_) | AppError::NotFound(_) | AppError::DuplicateReading { .. }
        )
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(category) => AppError::NotFound(format!("Category {}", category)),
            other => AppError::Configuration(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidReading(violation) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_READING".to_string(),
                    message: violation.to_string(),
                    field: Some(violation.field().to_string()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::DuplicateReading { kind, key } => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "DUPLICATE_READING".to_string(),
                    message: format!("A {} reading already exists for {}", kind, key),
                    field: None,
                },
            ),
            AppError::StorageError(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message: "The stock ledger storage is unavailable".to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
        };

        if self.is_caller_error() {
            tracing::warn!("Request rejected: {}", self);
        } else {
            tracing::error!("Error: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for services and handlers
pub type AppResult<T> = Result<T, AppError>;
