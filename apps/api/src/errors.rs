#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::inference::PredictionError;
use crate::pipeline::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Pipeline(err) => match err {
                PipelineError::Extraction(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    err.to_string(),
                ),
                PipelineError::Timeout(_) => {
                    tracing::error!("Pipeline timeout: {err}");
                    (StatusCode::GATEWAY_TIMEOUT, "PIPELINE_TIMEOUT", err.to_string())
                }
                PipelineError::Prediction {
                    source: PredictionError::Unavailable(_),
                    ..
                } => {
                    tracing::error!("Model unavailable: {err}");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "MODEL_UNAVAILABLE",
                        "A model backend is unavailable".to_string(),
                    )
                }
                PipelineError::Prediction { .. } => {
                    tracing::error!("Prediction error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PREDICTION_ERROR",
                        "A model inference error occurred".to_string(),
                    )
                }
                PipelineError::Worker { .. } => {
                    tracing::error!("Pipeline worker error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal server error occurred".to_string(),
                    )
                }
            },
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
    use crate::extraction::ExtractionError;
    use crate::pipeline::Stage;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (
                AppError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Pipeline(PipelineError::Extraction(ExtractionError::PdfParsing(
                    "x".to_string(),
                ))),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Pipeline(PipelineError::Timeout(Stage::Extraction)),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                AppError::Pipeline(PipelineError::Prediction {
                    stage: Stage::Classification,
                    source: PredictionError::Unavailable("lock poisoned".to_string()),
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Pipeline(PipelineError::Prediction {
                    stage: Stage::Recommendation,
                    source: PredictionError::Inference("boom".to_string()),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Pipeline(PipelineError::Worker {
                    stage: Stage::Classification,
                    message: "task panicked".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
