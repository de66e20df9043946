use std::sync::Arc;

use crate::config::Config;
use crate::scoring::pipeline::MatchPipeline;
use crate::scoring::ranking::RankingOptions;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Alias table, embedder and predictors, built once in `main`.
    pub pipeline: Arc<MatchPipeline>,
    pub ranking: RankingOptions,
}
