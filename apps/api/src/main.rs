mod config;
mod errors;
mod extraction;
mod routes;
mod scoring;
mod similarity;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::pipeline::MatchPipeline;
use crate::scoring::predictor::Predictors;
use crate::scoring::ranking::RankingOptions;
use crate::similarity::embedder::{Embedder, HashingEmbedder, HttpEmbedder};
use crate::skills::alias_table::AliasTable;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume score API v{}", env!("CARGO_PKG_VERSION"));

    // Alias table: built once, shared read-only
    let table = Arc::new(AliasTable::builtin().context("Failed to compile skill aliases")?);
    anyhow::ensure!(!table.is_empty(), "Skill alias table is empty");
    info!(
        "Alias table ready: {} aliases over {} skills",
        table.len(),
        table.skills().count()
    );

    let embedder = build_embedder(&config)?;
    check_embedder(embedder.as_ref()).await;

    let predictors = match &config.predictor_artifacts {
        Some(path) => {
            info!("Loading predictor artifacts from {}", path.display());
            Predictors::load(path)?
        }
        None => {
            warn!("PREDICTOR_ARTIFACTS not set; using heuristic score and category models");
            Predictors::heuristic()
        }
    };

    let pipeline = Arc::new(MatchPipeline::new(table, embedder, predictors));
    let ranking = RankingOptions {
        policy: config.ranking_failure_policy,
        concurrency: config.ranking_concurrency,
    };
    info!("Ranking policy: {:?}, concurrency {}", ranking.policy, ranking.concurrency);

    let state = AppState {
        config: config.clone(),
        pipeline,
        ranking,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.allowed_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Remote sentence-embedding model when `EMBEDDING_URL` is set, local hashing otherwise.
fn build_embedder(config: &Config) -> Result<Arc<dyn Embedder>> {
    match &config.embedding_url {
        Some(url) => {
            info!(
                "Embedding via {url} (model: {}, dim: {})",
                config.embedding_model, config.embedding_dim
            );
            let embedder = HttpEmbedder::new(
                url,
                config.embedding_model.clone(),
                config.embedding_api_key.clone(),
                config.embedding_dim,
            )
            .context("Failed to build embedding client")?;
            Ok(Arc::new(embedder))
        }
        None => {
            warn!(
                "EMBEDDING_URL not set; using local hashing embedder (dim: {})",
                config.embedding_dim
            );
            Ok(Arc::new(HashingEmbedder::new(config.embedding_dim)))
        }
    }
}

/// Encodes one sample sentence so a misconfigured backend shows up in the
/// startup log. Failures are logged, not fatal.
async fn check_embedder(embedder: &dyn Embedder) {
    match embedder.encode("embedding backend check").await {
        Ok(vector) if vector.len() == embedder.dimension() => {
            info!("Embedding backend ready (dim: {})", vector.len())
        }
        Ok(vector) => warn!(
            "Embedding backend returned dim {}, expected {}",
            vector.len(),
            embedder.dimension()
        ),
        Err(e) => warn!("Embedding backend check failed: {e}"),
    }
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
