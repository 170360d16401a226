#![allow(dead_code)]

pub mod labels;
pub mod onnx;

pub mod classifier;
pub mod recommender;

pub use classifier::*;
pub use labels::*;
pub use onnx::*;
pub use recommender::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("model session unavailable: {0}")]
    Unavailable(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model produced an invalid output: {0}")]
    InvalidOutput(String),
}

/// Contract shared by the classification and recommendation models: a
/// fixed-length token-id vector in, a probability distribution out.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[i64]) -> Result<Vec<f32>, PredictionError>;
}

/// Fixed-distribution predictor for exercising services and startup
/// validation without real model weights.
pub struct StubPredictor {
    distribution: Vec<f32>,
}

impl StubPredictor {
    pub fn new(distribution: Vec<f32>) -> Self {
        Self { distribution }
    }
}

impl Predictor for StubPredictor {
    fn predict(&self, _features: &[i64]) -> Result<Vec<f32>, PredictionError> {
        Ok(self.distribution.clone())
    }
}
