//! Error types for the PDF Text Extractor server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pdf::ExtractError;
use crate::upload::UploadError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Uploaded file must be a PDF")]
    InvalidFormat,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Error processing PDF: {0}")]
    ExtractionFailure(String),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        AppError::ExtractionFailure(e.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFormat | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExtractionFailure(_) | AppError::Upload(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidFormat => "invalid_format",
            AppError::BadRequest(_) => "bad_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::ExtractionFailure(_) => "extraction_failure",
            AppError::Upload(_) => "upload_error",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InvalidFormat | AppError::BadRequest(_) | AppError::PayloadTooLarge(_) => {
                tracing::warn!("Rejected request: {}", self)
            }
            AppError::ExtractionFailure(msg) => tracing::error!("Error processing PDF: {}", msg),
            AppError::Upload(e) => tracing::error!("Upload error: {}", e),
        }

        let body = Json(ErrorResponse {
            error: self.error_type().to_string(),
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}
