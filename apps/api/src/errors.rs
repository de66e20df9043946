use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::scoring::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media: {0}")]
    UnsupportedMedia(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Candidate error: {0}")]
    Candidate(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::MissingJobDescription => AppError::Validation(err.to_string()),
            PipelineError::Extraction(ExtractError::UnsupportedFormat(name)) => {
                AppError::UnsupportedMedia(format!(
                    "{name}: only .pdf, .docx and .txt documents are supported"
                ))
            }
            PipelineError::Extraction(e) => AppError::Extraction(e.to_string()),
            PipelineError::Candidate { .. } => AppError::Candidate(err.to_string()),
            PipelineError::Embedding(e) => AppError::Embedding(e.to_string()),
            PipelineError::Prediction(e) => AppError::Prediction(e.to_string()),
            PipelineError::FeatureContract { .. } | PipelineError::Task(_) => {
                AppError::Internal(anyhow::Error::new(err))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedMedia(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA",
                msg.clone(),
            ),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                msg.clone(),
            ),
            AppError::Candidate(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CANDIDATE_FAILED",
                msg.clone(),
            ),
            AppError::Embedding(msg) => {
                tracing::error!("Embedding error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EMBEDDING_ERROR",
                    "The embedding model could not be reached".to_string(),
                )
            }
            AppError::Prediction(msg) => {
                tracing::error!("Prediction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PREDICTION_ERROR",
                    "The scoring model failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::embedder::EmbeddingError;

    fn status_of(err: PipelineError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_missing_jd_is_bad_request() {
        assert_eq!(
            status_of(PipelineError::MissingJobDescription),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unsupported_format_is_415() {
        let err = PipelineError::Extraction(ExtractError::UnsupportedFormat("cv.odt".into()));
        assert_eq!(status_of(err), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_unreadable_pdf_is_422() {
        let err = PipelineError::Extraction(ExtractError::Pdf("bad xref".into()));
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_feature_contract_is_internal() {
        let err = PipelineError::FeatureContract {
            expected: 4,
            actual: 5,
        };
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_embedding_failure_is_internal() {
        let err = PipelineError::Embedding(EmbeddingError::Unavailable { retries: 3 });
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
