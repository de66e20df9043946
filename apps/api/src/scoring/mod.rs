// Scoring: feature aggregation, predictors, the per-pair pipeline and
// multi-candidate ranking, plus the HTTP handlers that expose them.

pub mod features;
pub mod handlers;
pub mod pipeline;
pub mod predictor;
pub mod ranking;

use thiserror::Error;

use crate::extraction::ExtractError;
use crate::scoring::predictor::PredictorError;
use crate::similarity::embedder::EmbeddingError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No job description provided")]
    MissingJobDescription,

    /// Feature layout does not match what the predictor accepts. Always a bug
    /// or a bad artifact, never a user error.
    #[error("feature contract violated: expected {expected} fields, got {actual}")]
    FeatureContract { expected: usize, actual: usize },

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictorError),

    #[error("candidate '{candidate}' failed: {source}")]
    Candidate {
        candidate: String,
        #[source]
        source: Box<PipelineError>,
    },

    #[error("scoring task failed: {0}")]
    Task(String),
}
