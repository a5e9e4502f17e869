//! # Web API Response Types
//!
//! The service's JSON envelope (`{"code", "message", "data"?}`) and the
//! error type handlers return. Leverages thiserror for structured error
//! handling and Axum's IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Standard success/error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: &'static str,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// Plain `{"code":"SUCCESS","message":"Success"}` envelope.
    pub fn success() -> Self {
        Self {
            code: "SUCCESS",
            message: "Success".to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success_with_data(data: T) -> Self {
        Self {
            code: "SUCCESS",
            message: "Success".to_string(),
            data: Some(data),
        }
    }
}

/// Web API errors with their HTTP status code and envelope code mappings.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Database operation failed: {operation}")]
    DatabaseError { operation: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn data_not_found(message: impl Into<String>) -> Self {
        Self::DataNotFound {
            message: message.into(),
        }
    }

    pub fn database_error(operation: impl Into<String>) -> Self {
        Self::DatabaseError {
            operation: operation.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, code, message) = match &self {
            ApiError::EndpointNotFound => (
                StatusCode::NOT_FOUND,
                "ENDPOINT_NOT_FOUND",
                "Endpoint not found".to_string(),
            ),
            ApiError::DataNotFound { message } => {
                (StatusCode::NOT_FOUND, "DATA_NOT_FOUND", message.clone())
            }
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }
            // Internal detail stays in the logs, not the response body.
            ApiError::DatabaseError { .. } | ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                "Internal server error".to_string(),
            ),
        };

        let body = ApiResponse::<()> {
            code,
            message,
            data: None,
        };

        (status_code, Json(body)).into_response()
    }
}

/// Convert sqlx errors to API errors.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::data_not_found("Database record not found"),
            _ => ApiError::database_error(err.to_string()),
        }
    }
}

/// Result type alias for web API operations.
pub type ApiResult<T> = Result<T, ApiError>;
