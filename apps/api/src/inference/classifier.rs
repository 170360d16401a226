//! Resume category classification: arg-max over the model's distribution.

use std::sync::Arc;

use crate::inference::{LabelDecoder, PredictionError, Predictor};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPrediction {
    pub label: String,
    pub confidence: f32,
}

pub struct ClassificationService {
    model: Arc<dyn Predictor>,
    labels: Arc<LabelDecoder>,
}

impl ClassificationService {
    pub fn new(model: Arc<dyn Predictor>, labels: Arc<LabelDecoder>) -> Self {
        Self { model, labels }
    }

    /// Runs the category model and decodes the arg-max class. Confidence is
    /// the arg-max probability itself.
    pub fn classify(&self, features: &[i64]) -> Result<CategoryPrediction, PredictionError> {
        let distribution = self.model.predict(features)?;

        let (index, confidence) = argmax(&distribution).ok_or_else(|| {
            PredictionError::InvalidOutput("empty classifier distribution".to_string())
        })?;
        let label = self.labels.decode(index).ok_or_else(|| {
            PredictionError::InvalidOutput(format!(
                "class index {index} outside the {} trained labels",
                self.labels.len()
            ))
        })?;

        Ok(CategoryPrediction {
            label: label.to_string(),
            confidence,
        })
    }
}

/// Index and value of the largest entry; ties resolve to the lowest index,
/// matching the trained encoder's class ordering.
fn argmax(distribution: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &p) in distribution.iter().enumerate() {
        match best {
            Some((_, current)) if p <= current => {}
            _ => best = Some((index, p)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::StubPredictor;

    fn make_service(distribution: Vec<f32>, labels: &[&str]) -> ClassificationService {
        ClassificationService::new(
            Arc::new(StubPredictor::new(distribution)),
            Arc::new(LabelDecoder::new(
                labels.iter().map(|l| l.to_string()).collect(),
            )),
        )
    }

    #[test]
    fn test_classify_picks_argmax_label() {
        let service = make_service(vec![0.1, 0.7, 0.2], &["Advocate", "Data Science", "HR"]);
        let prediction = service.classify(&[0; 4]).unwrap();
        assert_eq!(prediction.label, "Data Science");
        assert!((prediction.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_confidence_stays_within_unit_interval() {
        let service = make_service(vec![0.25, 0.5, 0.25], &["A", "B", "C"]);
        let prediction = service.classify(&[0; 4]).unwrap();
        assert!(
            prediction.confidence > 0.0 && prediction.confidence <= 1.0,
            "confidence {} outside (0, 1]",
            prediction.confidence
        );
    }

    #[test]
    fn test_tie_resolves_to_first_class() {
        let service = make_service(vec![0.4, 0.4, 0.2], &["A", "B", "C"]);
        assert_eq!(service.classify(&[0; 4]).unwrap().label, "A");
    }

    #[test]
    fn test_empty_distribution_is_invalid_output() {
        let service = make_service(vec![], &["A"]);
        assert!(matches!(
            service.classify(&[0; 4]),
            Err(PredictionError::InvalidOutput(_))
        ));
    }

    #[test]
    fn test_index_beyond_decoder_is_invalid_output() {
        let service = make_service(vec![0.1, 0.2, 0.7], &["A", "B"]);
        assert!(matches!(
            service.classify(&[0; 4]),
            Err(PredictionError::InvalidOutput(_))
        ));
    }

    #[test]
    fn test_argmax_basics() {
        assert_eq!(argmax(&[0.05, 0.9, 0.05]), Some((1, 0.9)));
        assert_eq!(argmax(&[]), None);
    }
}
