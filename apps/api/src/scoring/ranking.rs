//! Ranking Orchestrator: scores many resumes against one job description.
//!
//! Each candidate runs the full pipeline in its own task, bounded by a
//! semaphore. Results are collected in submission order, then stably sorted
//! by display score (descending), so equal scores keep submission order.

use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::extraction::ExtractError;
use crate::scoring::features::SkillHit;
use crate::scoring::pipeline::{Evaluation, JobProfile, MatchPipeline};
use crate::scoring::PipelineError;

/// What to do when one candidate cannot be extracted or scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchFailurePolicy {
    /// Record a failure entry for the candidate and rank the rest.
    #[default]
    SkipAndReport,
    /// Fail the whole request on the first failing candidate.
    AbortBatch,
}

impl FromStr for BatchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "skip-and-report" => Ok(Self::SkipAndReport),
            "abort" | "abort-batch" => Ok(Self::AbortBatch),
            other => Err(format!("unknown ranking failure policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RankingOptions {
    pub policy: BatchFailurePolicy,
    pub concurrency: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            policy: BatchFailurePolicy::default(),
            concurrency: 4,
        }
    }
}

/// One submitted resume. `text` is an error when the document could not be read.
#[derive(Debug)]
pub struct Candidate {
    pub id: String,
    pub text: Result<String, ExtractError>,
}

#[cfg(test)]
impl Candidate {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Ok(text.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    #[serde(rename = "resume_name")]
    pub candidate: String,
    #[serde(rename = "score")]
    pub predicted_score: f64,
    pub category: String,
    pub matched_skills: Vec<SkillHit>,
    pub missing_skills: Vec<SkillHit>,
    #[serde(rename = "tfidf_similarity")]
    pub lexical_score: f64,
    #[serde(rename = "bert_similarity")]
    pub semantic_score: f64,
}

impl RankedResult {
    fn new(candidate: String, evaluation: Evaluation) -> Self {
        Self {
            candidate,
            predicted_score: evaluation.display_score(),
            category: evaluation.category,
            matched_skills: evaluation.skills.matched,
            missing_skills: evaluation.skills.missing,
            lexical_score: evaluation.features.lexical_score,
            semantic_score: evaluation.features.semantic_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateFailure {
    #[serde(rename = "resume_name")]
    pub candidate: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RankingOutcome {
    pub results: Vec<RankedResult>,
    pub failures: Vec<CandidateFailure>,
}

pub async fn rank_candidates(
    pipeline: Arc<MatchPipeline>,
    job: Arc<JobProfile>,
    candidates: Vec<Candidate>,
    options: RankingOptions,
) -> Result<RankingOutcome, PipelineError> {
    let permits = Arc::new(Semaphore::new(options.concurrency.max(1)));

    let tasks: Vec<(String, JoinHandle<Result<Evaluation, PipelineError>>)> = candidates
        .into_iter()
        .map(|Candidate { id, text }| {
            let pipeline = pipeline.clone();
            let job = job.clone();
            let permits = permits.clone();
            let handle = tokio::spawn(async move {
                let text = text?;
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| PipelineError::Task(e.to_string()))?;
                pipeline.evaluate(&text, &job).await
            });
            (id, handle)
        })
        .collect();

    let mut outcome = RankingOutcome::default();
    let mut pending = tasks.into_iter();

    while let Some((id, handle)) = pending.next() {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(PipelineError::Task(e.to_string())),
        };

        match (result, options.policy) {
            (Ok(evaluation), _) => outcome.results.push(RankedResult::new(id, evaluation)),
            (Err(err), BatchFailurePolicy::SkipAndReport) => {
                warn!(candidate = %id, "Skipping candidate: {err}");
                outcome.failures.push(CandidateFailure {
                    candidate: id,
                    reason: err.to_string(),
                });
            }
            (Err(err), BatchFailurePolicy::AbortBatch) => {
                pending.by_ref().for_each(|(_, handle)| handle.abort());
                warn!(candidate = %id, "Aborting ranking batch: {err}");
                return Err(PipelineError::Candidate {
                    candidate: id,
                    source: Box::new(err),
                });
            }
        }
    }

    outcome
        .results
        .sort_by(|a, b| b.predicted_score.total_cmp(&a.predicted_score));

    info!(
        ranked = outcome.results.len(),
        failed = outcome.failures.len(),
        "Ranked candidates"
    );
    Ok(outcome)
}
