use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Runtime configuration, read once at startup. Every knob has a working
/// default; the environment (and a `.env` file, if present) overrides.
#[derive(Debug, Clone)]
pub struct Config {
    // Artifact locations
    pub classifier_model_path: PathBuf,
    pub recommender_model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    pub label_decoder_path: PathBuf,

    // Pipeline knobs
    pub max_sequence_length: usize,
    pub recommendation_min_score: f32,
    pub recommendation_top_k: usize,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,

    // Server
    pub port: u16,
    pub rust_log: String,

    // OCR build only; ignored otherwise
    #[allow(dead_code)]
    pub tessdata_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            classifier_model_path: env_or("CLASSIFIER_MODEL_PATH", "models/resume_classifier.onnx")
                .into(),
            recommender_model_path: env_or("RECOMMENDER_MODEL_PATH", "models/job_recommender.onnx")
                .into(),
            vectorizer_path: env_or("VECTORIZER_PATH", "models/tokenizer.json").into(),
            label_decoder_path: env_or("LABEL_DECODER_PATH", "models/label_encoder.json").into(),
            max_sequence_length: env_or("MAX_SEQUENCE_LENGTH", "500")
                .parse::<usize>()
                .context("MAX_SEQUENCE_LENGTH must be a positive integer")?,
            recommendation_min_score: env_or("RECOMMENDATION_MIN_SCORE", "0.05")
                .parse::<f32>()
                .context("RECOMMENDATION_MIN_SCORE must be a number between 0 and 1")?,
            recommendation_top_k: env_or("RECOMMENDATION_TOP_K", "3")
                .parse::<usize>()
                .context("RECOMMENDATION_TOP_K must be a non-negative integer")?,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            tessdata_dir: env_or("TESSDATA_DIR", "/usr/share/tesseract-ocr/4.00/tessdata").into(),
        };

        ensure!(
            config.max_sequence_length > 0,
            "MAX_SEQUENCE_LENGTH must be at least 1"
        );
        ensure!(
            (0.0..=1.0).contains(&config.recommendation_min_score),
            "RECOMMENDATION_MIN_SCORE must be between 0 and 1"
        );

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
