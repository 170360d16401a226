pub mod handlers;

use std::fmt;

use bytes::Bytes;
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

use crate::extraction::{ExtractedText, ExtractionError};
use crate::inference::{CategoryPrediction, PredictionError, RoleRecommendation};
use crate::state::AppState;
use crate::text::normalize;

/// Pipeline stages, in execution order. Carried by every error so callers
/// always see which stage a request failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extraction,
    Normalization,
    Vectorization,
    Classification,
    Recommendation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extraction => "extraction",
            Stage::Normalization => "normalization",
            Stage::Vectorization => "vectorization",
            Stage::Classification => "classification",
            Stage::Recommendation => "recommendation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("document extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("{stage} failed: {source}")]
    Prediction {
        stage: Stage,
        #[source]
        source: PredictionError,
    },

    #[error("{0} stage timed out")]
    Timeout(Stage),

    #[error("{stage} worker failed: {message}")]
    Worker { stage: Stage, message: String },
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Extraction(_) => Stage::Extraction,
            PipelineError::Prediction { stage, .. } => *stage,
            PipelineError::Timeout(stage) => *stage,
            PipelineError::Worker { stage, .. } => *stage,
        }
    }
}

/// Fully assembled pipeline output. Either every field is present or the
/// request failed; partial results are never emitted.
#[derive(Debug)]
pub struct ResumeAnalysis {
    pub extracted: ExtractedText,
    pub category: CategoryPrediction,
    pub recommendations: Vec<RoleRecommendation>,
    pub summary: String,
}

/// Runs the full document pipeline under one shared deadline. Stages execute
/// strictly in order; the compute-heavy ones run on the blocking pool so a
/// slow document does not stall other requests.
pub async fn analyze_resume(
    state: &AppState,
    document: Bytes,
) -> Result<ResumeAnalysis, PipelineError> {
    let deadline = Instant::now() + state.config.request_timeout();

    let extractor = state.extractor.clone();
    let extracted = offload(Stage::Extraction, deadline, move || {
        extractor
            .extract(&document)
            .map_err(PipelineError::Extraction)
    })
    .await?;
    debug!(
        stage = %Stage::Extraction,
        source = ?extracted.source,
        chars = extracted.text.len(),
        "stage complete"
    );

    let normalized = normalize(&extracted.text);
    debug!(stage = %Stage::Normalization, chars = normalized.len(), "stage complete");

    let features = state.vectorizer.vectorize(&normalized);
    debug!(stage = %Stage::Vectorization, dimension = features.len(), "stage complete");

    let classifier = state.classifier.clone();
    let classify_features = features.clone();
    let category = offload(Stage::Classification, deadline, move || {
        classifier
            .classify(&classify_features)
            .map_err(|source| PipelineError::Prediction {
                stage: Stage::Classification,
                source,
            })
    })
    .await?;
    debug!(stage = %Stage::Classification, label = %category.label, "stage complete");

    let recommender = state.recommender.clone();
    let recommendations = offload(Stage::Recommendation, deadline, move || {
        recommender
            .recommend(&features)
            .map_err(|source| PipelineError::Prediction {
                stage: Stage::Recommendation,
                source,
            })
    })
    .await?;
    debug!(stage = %Stage::Recommendation, roles = recommendations.len(), "stage complete");

    let summary = render_summary(&category);
    Ok(ResumeAnalysis {
        extracted,
        category,
        recommendations,
        summary,
    })
}

/// Classification-only flow for the text endpoint: normalize, vectorize,
/// classify, under the same deadline discipline as the document pipeline.
pub async fn classify_text(
    state: &AppState,
    text: &str,
) -> Result<CategoryPrediction, PipelineError> {
    let deadline = Instant::now() + state.config.request_timeout();

    let normalized = normalize(text);
    let features = state.vectorizer.vectorize(&normalized);

    let classifier = state.classifier.clone();
    offload(Stage::Classification, deadline, move || {
        classifier
            .classify(&features)
            .map_err(|source| PipelineError::Prediction {
                stage: Stage::Classification,
                source,
            })
    })
    .await
}

/// Summary string, derived from the already-computed prediction values.
pub fn render_summary(category: &CategoryPrediction) -> String {
    format!(
        "Predicted resume category: {} (confidence = {:.2}).",
        category.label, category.confidence
    )
}

/// Runs one compute-heavy stage on the blocking pool, bounded by the shared
/// request deadline.
async fn offload<T, F>(stage: Stage, deadline: Instant, work: F) -> Result<T, PipelineError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PipelineError> + Send + 'static,
{
    match tokio::time::timeout_at(deadline, tokio::task::spawn_blocking(work)).await {
        Err(_) => Err(PipelineError::Timeout(stage)),
        Ok(Err(join_error)) => Err(PipelineError::Worker {
            stage,
            message: join_error.to_string(),
        }),
        Ok(Ok(result)) => result,
    }
}
