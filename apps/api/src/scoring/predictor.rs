//! Predictors: the opaque score regressor, category classifier and label
//! decoder, as swappable traits.
//!
//! Built-in backends are linear models whose parameters come from a JSON
//! artifact file (`PREDICTOR_ARTIFACTS`) or from the heuristic defaults below.
//! Artifact arity is checked on load so a mismatched model fails at startup,
//! never mid-request.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::scoring::features::{
    CategoryFeatures, ScoreFeatures, CATEGORY_FEATURE_COUNT, SCORE_FEATURE_COUNT,
};
use crate::scoring::PipelineError;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("classifier has no classes")]
    NoClasses,

    #[error("unknown category code {code} ({known} labels known)")]
    UnknownCategory { code: usize, known: usize },

    #[error("predictor produced a non-finite value")]
    NonFinite,
}

pub trait ScorePredictor: Send + Sync {
    fn predict(&self, features: &ScoreFeatures) -> Result<f64, PredictorError>;
}

pub trait CategoryPredictor: Send + Sync {
    fn predict(&self, features: &CategoryFeatures) -> Result<usize, PredictorError>;
}

pub trait LabelDecoder: Send + Sync {
    fn decode(&self, code: usize) -> Result<String, PredictorError>;
}

/// The three collaborators the pipeline needs to turn features into a verdict.
#[derive(Clone)]
pub struct Predictors {
    pub score: Arc<dyn ScorePredictor>,
    pub category: Arc<dyn CategoryPredictor>,
    pub labels: Arc<dyn LabelDecoder>,
}

impl Predictors {
    /// Built-in heuristic models, used when no artifact file is configured.
    pub fn heuristic() -> Self {
        Self::from_models(
            LinearRegressor::heuristic(),
            LinearClassifier::heuristic(),
            LabelEncoder::heuristic(),
        )
    }

    pub fn from_models(
        score: LinearRegressor,
        category: LinearClassifier,
        labels: LabelEncoder,
    ) -> Self {
        Self {
            score: Arc::new(score),
            category: Arc::new(category),
            labels: Arc::new(labels),
        }
    }

    /// Loads linear model parameters from a JSON artifact file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read predictor artifacts {}", path.display()))?;
        let artifacts: PredictorArtifacts = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid predictor artifacts {}", path.display()))?;
        let (score, category, labels) = artifacts.into_models()?;
        Ok(Self::from_models(score, category, labels))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Artifact file
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PredictorArtifacts {
    pub regressor: RegressorArtifact,
    pub classifier: ClassifierArtifact,
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegressorArtifact {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Deserialize)]
pub struct ClassifierArtifact {
    /// One weight row per class.
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl PredictorArtifacts {
    pub fn into_models(
        self,
    ) -> Result<(LinearRegressor, LinearClassifier, LabelEncoder), PipelineError> {
        let regressor = LinearRegressor {
            coefficients: ScoreFeatures::try_from(self.regressor.coefficients.as_slice())?.0,
            intercept: self.regressor.intercept,
        };

        let classifier = &self.classifier;
        if classifier.coefficients.len() != classifier.intercepts.len() {
            return Err(PipelineError::FeatureContract {
                expected: classifier.coefficients.len(),
                actual: classifier.intercepts.len(),
            });
        }
        let weights = classifier
            .coefficients
            .iter()
            .map(|row| CategoryFeatures::try_from(row.as_slice()).map(|f| f.0))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((
            regressor,
            LinearClassifier {
                weights,
                intercepts: self.classifier.intercepts,
            },
            LabelEncoder {
                classes: self.labels,
            },
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Linear backends
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LinearRegressor {
    pub coefficients: [f64; SCORE_FEATURE_COUNT],
    pub intercept: f64,
}

impl LinearRegressor {
    /// 30·lexical + 50·semantic + 4·matched − 3·missing + 10
    pub fn heuristic() -> Self {
        Self {
            coefficients: [30.0, 50.0, 4.0, -3.0],
            intercept: 10.0,
        }
    }
}

impl ScorePredictor for LinearRegressor {
    fn predict(&self, features: &ScoreFeatures) -> Result<f64, PredictorError> {
        let score = dot(&self.coefficients, &features.0) + self.intercept;
        if score.is_finite() {
            Ok(score)
        } else {
            Err(PredictorError::NonFinite)
        }
    }
}

/// Multi-class linear model; predicts the class with the highest decision value.
/// Ties go to the lower class code.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    pub weights: Vec<[f64; CATEGORY_FEATURE_COUNT]>,
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Bands on the predicted score only: <40, 40-60, 60-80, ≥80.
    pub fn heuristic() -> Self {
        let band = |k: f64| [0.0, 0.0, 0.0, 0.0, 0.1 * k];
        Self {
            weights: vec![band(0.0), band(1.0), band(2.0), band(3.0)],
            intercepts: vec![0.0, -4.0, -10.0, -18.0],
        }
    }
}

impl CategoryPredictor for LinearClassifier {
    fn predict(&self, features: &CategoryFeatures) -> Result<usize, PredictorError> {
        let mut best: Option<(usize, f64)> = None;
        let rows = self.weights.iter().zip(&self.intercepts);
        for (class, (weights, intercept)) in rows.enumerate() {
            let decision = dot(weights, &features.0) + intercept;
            if !decision.is_finite() {
                return Err(PredictorError::NonFinite);
            }
            if best.map_or(true, |(_, top)| decision > top) {
                best = Some((class, decision));
            }
        }
        best.map(|(class, _)| class).ok_or(PredictorError::NoClasses)
    }
}

/// Maps class codes back to their labels, by position.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn heuristic() -> Self {
        Self {
            classes: ["Low Match", "Moderate Match", "Good Match", "Excellent Match"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl LabelDecoder for LabelEncoder {
    fn decode(&self, code: usize) -> Result<String, PredictorError> {
        self.classes
            .get(code)
            .cloned()
            .ok_or(PredictorError::UnknownCategory {
                code,
                known: self.classes.len(),
            })
    }
}

fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
