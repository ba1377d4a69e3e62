use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("URL does not point to a PDF: {url} (content type: {content_type})")]
    NotPdf { url: String, content_type: String },
    #[error("failed to download PDF from {url}: {cause}")]
    DownloadFailed { url: String, cause: anyhow::Error },
    #[error("failed to extract text from PDF: {0}")]
    ExtractionFailed(String),
    #[error("{provider} summarization failed: {cause}")]
    Backend {
        provider: &'static str,
        cause: anyhow::Error,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) | ApiError::NotPdf { .. } => StatusCode::BAD_REQUEST,
            ApiError::DownloadFailed { .. } | ApiError::Backend { .. } => StatusCode::BAD_GATEWAY,
            ApiError::ExtractionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            status: "error".to_string(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
