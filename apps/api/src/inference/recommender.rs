//! Job-role recommendation: policy-driven selection over the recommender
//! model's output distribution.

use std::sync::Arc;

use serde::Serialize;

use crate::inference::{LabelDecoder, PredictionError, Predictor};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRecommendation {
    pub label: String,
    pub score: f32, // probability in [0.0, 1.0]
}

// ────────────────────────────────────────────────────────────────────────────
// Selection policy
// ────────────────────────────────────────────────────────────────────────────

/// Rule for turning a role distribution into a recommendation list.
///
/// 1. Rank every role by score descending; equal scores order by label
///    ascending.
/// 2. Keep the roles scoring at least `min_score`.
/// 3. If nothing clears the threshold, keep the `top_k` best-ranked roles
///    instead. A non-empty distribution always yields at least one role.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationPolicy {
    pub min_score: f32,
    pub top_k: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Service
// ────────────────────────────────────────────────────────────────────────────

pub struct RecommendationService {
    model: Arc<dyn Predictor>,
    labels: Arc<LabelDecoder>,
    policy: RecommendationPolicy,
}

impl RecommendationService {
    pub fn new(
        model: Arc<dyn Predictor>,
        labels: Arc<LabelDecoder>,
        policy: RecommendationPolicy,
    ) -> Self {
        Self {
            model,
            labels,
            policy,
        }
    }

    pub fn recommend(&self, features: &[i64]) -> Result<Vec<RoleRecommendation>, PredictionError> {
        let distribution = self.model.predict(features)?;
        Ok(select_roles(&distribution, &self.labels, self.policy))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core selection
// ────────────────────────────────────────────────────────────────────────────

/// Applies [`RecommendationPolicy`] to a full distribution. Indices without a
/// decoder label are skipped (startup validation keeps widths aligned in
/// production).
fn select_roles(
    distribution: &[f32],
    labels: &LabelDecoder,
    policy: RecommendationPolicy,
) -> Vec<RoleRecommendation> {
    let mut ranked: Vec<RoleRecommendation> = distribution
        .iter()
        .enumerate()
        .filter_map(|(index, &score)| {
            labels.decode(index).map(|label| RoleRecommendation {
                label: label.to_string(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.label.cmp(&b.label))
    });

    let above_threshold = ranked
        .iter()
        .take_while(|r| r.score >= policy.min_score)
        .count();
    if above_threshold > 0 {
        ranked.truncate(above_threshold);
    } else {
        ranked.truncate(policy.top_k);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::StubPredictor;

    fn make_labels(labels: &[&str]) -> Arc<LabelDecoder> {
        Arc::new(LabelDecoder::new(
            labels.iter().map(|l| l.to_string()).collect(),
        ))
    }

    fn policy(min_score: f32, top_k: usize) -> RecommendationPolicy {
        RecommendationPolicy { min_score, top_k }
    }

    #[test]
    fn test_sorted_by_non_increasing_score() {
        let labels = make_labels(&["Backend", "Data Engineer", "QA"]);
        let roles = select_roles(&[0.1, 0.6, 0.3], &labels, policy(0.05, 3));
        let scores: Vec<f32> = roles.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.6, 0.3, 0.1]);
        assert_eq!(roles[0].label, "Data Engineer");
    }

    #[test]
    fn test_threshold_filters_low_scores() {
        let labels = make_labels(&["Backend", "Data Engineer", "QA"]);
        let roles = select_roles(&[0.1, 0.6, 0.3], &labels, policy(0.25, 3));
        let names: Vec<&str> = roles.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(names, vec!["Data Engineer", "QA"]);
    }

    #[test]
    fn test_equal_scores_order_by_label() {
        let labels = make_labels(&["Zeta", "Alpha", "Mid"]);
        let roles = select_roles(&[0.4, 0.4, 0.2], &labels, policy(0.05, 3));
        let names: Vec<&str> = roles.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta", "Mid"]);
    }

    #[test]
    fn test_falls_back_to_top_k_below_threshold() {
        let labels = make_labels(&["Backend", "Data Engineer", "QA"]);
        let roles = select_roles(&[0.01, 0.03, 0.02], &labels, policy(0.5, 2));
        let names: Vec<&str> = roles.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(names, vec!["Data Engineer", "QA"]);
    }

    #[test]
    fn test_top_k_wider_than_role_set_returns_all() {
        let labels = make_labels(&["Backend", "QA"]);
        let roles = select_roles(&[0.01, 0.02], &labels, policy(0.5, 10));
        assert_eq!(roles.len(), 2);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let service = RecommendationService::new(
            Arc::new(StubPredictor::new(vec![0.2, 0.2, 0.6])),
            make_labels(&["B", "A", "C"]),
            policy(0.05, 3),
        );
        let first = service.recommend(&[0; 4]).unwrap();
        let second = service.recommend(&[0; 4]).unwrap();
        assert_eq!(first, second);
        let names: Vec<&str> = first.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
