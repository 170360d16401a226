use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::inference::RoleRecommendation;
use crate::pipeline::{analyze_resume, classify_text, ResumeAnalysis};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct TextPredictionResponse {
    pub predicted_category: String,
    pub confidence: f32,
}

#[derive(Serialize)]
pub struct PipelineResponse {
    pub extracted_text: String,
    pub predicted_category: String,
    pub confidence: f32,
    pub job_role_predictions: Vec<RoleRecommendation>,
    pub summary: String,
}

impl From<ResumeAnalysis> for PipelineResponse {
    fn from(analysis: ResumeAnalysis) -> Self {
        Self {
            extracted_text: analysis.extracted.text,
            predicted_category: analysis.category.label,
            confidence: analysis.category.confidence,
            job_role_predictions: analysis.recommendations,
            summary: analysis.summary,
        }
    }
}

/// POST /predict/resume_text
pub async fn handle_predict_text(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<TextPredictionResponse>, AppError> {
    let prediction = classify_text(&state, &req.text).await?;
    Ok(Json(TextPredictionResponse {
        predicted_category: prediction.label,
        confidence: prediction.confidence,
    }))
}

/// POST /pipeline/analyze_resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PipelineResponse>, AppError> {
    let document = read_file_field(multipart).await?;
    let analysis = analyze_resume(&state, document).await?;
    Ok(Json(PipelineResponse::from(analysis)))
}

/// Pulls the `file` part out of the multipart payload.
async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            if bytes.is_empty() {
                return Err(AppError::Validation("uploaded file is empty".to_string()));
            }
            return Ok(bytes);
        }
    }
    Err(AppError::Validation(
        "multipart payload must contain a 'file' field".to_string(),
    ))
}
