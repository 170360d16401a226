//! ONNX Runtime sessions backing the trained models.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use tracing::info;

use crate::artifacts::ArtifactError;
use crate::inference::{PredictionError, Predictor};

/// Session-backed [`Predictor`].
///
/// Uses interior mutability (Mutex) because `ort::Session::run` requires
/// `&mut self` while the trait exposes `&self` for shared use by concurrent
/// in-flight requests.
#[derive(Debug)]
pub struct OnnxPredictor {
    session: Mutex<Session>,
    name: &'static str,
}

impl OnnxPredictor {
    /// Opens the exported model file and builds an inference session.
    /// Missing files are reported before ONNX Runtime is touched.
    pub fn load(name: &'static str, path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::Missing(path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(|e: ort::Error| ArtifactError::ModelInit(path.to_path_buf(), e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e: ort::Error| ArtifactError::ModelInit(path.to_path_buf(), e.to_string()))?
            .commit_from_file(path)
            .map_err(|e: ort::Error| ArtifactError::ModelInit(path.to_path_buf(), e.to_string()))?;

        info!("{name} model loaded from {}", path.display());

        Ok(Self {
            session: Mutex::new(session),
            name,
        })
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, features: &[i64]) -> Result<Vec<f32>, PredictionError> {
        use ort::value::TensorRef;

        let array = ndarray::Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| PredictionError::Inference(e.to_string()))?;
        let tensor = TensorRef::from_array_view(&array)
            .map_err(|e| PredictionError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| PredictionError::Unavailable(format!("{} session lock poisoned", self.name)))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| PredictionError::Inference(format!("{}: {e}", self.name)))?;

        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictionError::InvalidOutput(format!("{}: {e}", self.name)))?;

        // One distribution row: [1, n] (or a squeezed [n]).
        let row_shaped = match shape.len() {
            1 => true,
            2 => shape[0] == 1,
            _ => false,
        };
        if !row_shaped {
            return Err(PredictionError::InvalidOutput(format!(
                "{}: unexpected output shape {shape:?}",
                self.name
            )));
        }

        let distribution = data.to_vec();
        if distribution.is_empty() {
            return Err(PredictionError::InvalidOutput(format!(
                "{}: empty output distribution",
                self.name
            )));
        }
        if distribution.iter().any(|p| !p.is_finite()) {
            return Err(PredictionError::InvalidOutput(format!(
                "{}: non-finite probability in output",
                self.name
            )));
        }

        Ok(distribution)
    }
}
