use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::inference::{ClassificationService, RecommendationService};
use crate::text::SequenceVectorizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vectorizer: Arc<SequenceVectorizer>,
    pub extractor: Arc<DocumentExtractor>,
    pub classifier: Arc<ClassificationService>,
    pub recommender: Arc<RecommendationService>,
}
