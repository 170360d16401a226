//! One-time artifact loading and eager startup validation.
//!
//! Everything the inference services need (the fitted vectorizer, the label
//! decoder, and both exported models) is read here exactly once, before the
//! listener binds. A missing or shape-incompatible artifact stops the process
//! at startup instead of failing on the first request.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::inference::{LabelDecoder, OnnxPredictor, PredictionError, Predictor};
use crate::text::SequenceVectorizer;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, String),

    #[error("model init failed for {}: {}", .0.display(), .1)]
    ModelInit(PathBuf, String),

    #[error("label decoder holds no classes")]
    EmptyLabels,

    #[error("{0} startup probe failed: {1}")]
    Probe(&'static str, #[source] PredictionError),

    #[error("{model} output width {actual} does not match the {expected} decoder labels")]
    ShapeMismatch {
        model: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Immutable handles to the loaded artifacts, shared by every in-flight
/// request for the lifetime of the process.
pub struct ModelArtifacts {
    pub vectorizer: Arc<SequenceVectorizer>,
    pub labels: Arc<LabelDecoder>,
    pub classifier_model: Arc<dyn Predictor>,
    pub recommender_model: Arc<dyn Predictor>,
}

impl ModelArtifacts {
    pub fn load(config: &Config) -> Result<Self, ArtifactError> {
        info!("Loading model artifacts...");

        let vectorizer = read_vectorizer(&config.vectorizer_path, config.max_sequence_length)?;
        let labels = read_labels(&config.label_decoder_path)?;
        let classifier_model = OnnxPredictor::load("classifier", &config.classifier_model_path)?;
        let recommender_model = OnnxPredictor::load("recommender", &config.recommender_model_path)?;

        let artifacts = Self {
            vectorizer: Arc::new(vectorizer),
            labels: Arc::new(labels),
            classifier_model: Arc::new(classifier_model),
            recommender_model: Arc::new(recommender_model),
        };
        artifacts.validate()?;

        info!(
            vocabulary = artifacts.vectorizer.vocab_size(),
            labels = artifacts.labels.len(),
            dimension = artifacts.vectorizer.dimension(),
            "Artifacts loaded and validated"
        );
        Ok(artifacts)
    }

    /// Startup probe: the vectorizer's all-filler vector (its output for
    /// empty text) runs through each model once, and each output width must
    /// equal the decoder's class count. A model that rejects the probe's
    /// width or dtype fails here, before any traffic is accepted.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.labels.is_empty() {
            return Err(ArtifactError::EmptyLabels);
        }

        let probe = self.vectorizer.vectorize("");
        for (name, model) in [
            ("classifier", &self.classifier_model),
            ("recommender", &self.recommender_model),
        ] {
            let distribution = model
                .predict(&probe)
                .map_err(|e| ArtifactError::Probe(name, e))?;
            if distribution.len() != self.labels.len() {
                return Err(ArtifactError::ShapeMismatch {
                    model: name,
                    expected: self.labels.len(),
                    actual: distribution.len(),
                });
            }
        }
        Ok(())
    }
}

fn read_vectorizer(path: &Path, max_length: usize) -> Result<SequenceVectorizer, ArtifactError> {
    let raw = read_artifact(path)?;
    SequenceVectorizer::from_json(&raw, max_length)
        .map_err(|e| ArtifactError::Parse(path.to_path_buf(), e.to_string()))
}

fn read_labels(path: &Path) -> Result<LabelDecoder, ArtifactError> {
    let raw = read_artifact(path)?;
    LabelDecoder::from_json(&raw)
        .map_err(|e| ArtifactError::Parse(path.to_path_buf(), e.to_string()))
}

fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| ArtifactError::Io(path.to_path_buf(), e))
}
