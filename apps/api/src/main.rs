mod artifacts;
mod config;
mod errors;
mod extraction;
mod inference;
mod pipeline;
mod routes;
mod state;
mod text;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::artifacts::ModelArtifacts;
use crate::config::Config;
use crate::extraction::{DocumentExtractor, PdfTextLayer};
use crate::inference::{ClassificationService, RecommendationPolicy, RecommendationService};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Load model artifacts (fails fast on missing or inconsistent files)
    let artifacts = ModelArtifacts::load(&config).context("model artifact loading failed")?;

    // Initialize the document extractor
    let extractor = Arc::new(build_extractor(&config)?);

    // Assemble the inference services
    let classifier = Arc::new(ClassificationService::new(
        artifacts.classifier_model.clone(),
        artifacts.labels.clone(),
    ));
    let recommender = Arc::new(RecommendationService::new(
        artifacts.recommender_model.clone(),
        artifacts.labels.clone(),
        RecommendationPolicy {
            min_score: config.recommendation_min_score,
            top_k: config.recommendation_top_k,
        },
    ));

    // Build app state
    let state = AppState {
        config: config.clone(),
        vectorizer: artifacts.vectorizer.clone(),
        extractor,
        classifier,
        recommender,
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the document extractor for this build profile.
#[cfg(feature = "ocr")]
fn build_extractor(config: &Config) -> Result<DocumentExtractor> {
    use crate::extraction::TesseractOcr;

    let ocr = TesseractOcr::new(&config.tessdata_dir)?;
    info!(
        "OCR engine initialized (tessdata: {})",
        config.tessdata_dir.display()
    );
    Ok(DocumentExtractor::new(
        Box::new(ocr),
        Box::new(PdfTextLayer),
    ))
}

#[cfg(not(feature = "ocr"))]
fn build_extractor(_config: &Config) -> Result<DocumentExtractor> {
    use crate::extraction::DisabledOcr;

    info!("OCR disabled at build time, extraction uses the embedded text layer only");
    Ok(DocumentExtractor::new(
        Box::new(DisabledOcr),
        Box::new(PdfTextLayer),
    ))
}
