//! Axum route handlers for scoring and ranking.
//!
//! Both endpoints take multipart uploads: `resume` / `resumes` files plus
//! either a `jd_file` upload or `jd_text_input` text.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::{extract_named, ExtractError};
use crate::scoring::features::SkillHit;
use crate::scoring::pipeline::resolve_job_description;
use crate::scoring::ranking::{rank_candidates, Candidate, CandidateFailure, RankedResult};
use crate::scoring::PipelineError;
use crate::state::AppState;

const SUCCESS_MESSAGE: &str = "Processed successfully";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Upload {
    file_name: String,
    bytes: Bytes,
}

#[derive(Debug, Default)]
struct UploadForm {
    resumes: Vec<Upload>,
    jd_file: Option<Upload>,
    jd_text_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchData {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub tfidf_similarity: f64,
    pub bert_similarity: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: f64,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ScorePredictionResponse {
    pub message: String,
    pub data: MatchData,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub message: String,
    pub results: Vec<RankedResult>,
    pub failures: Vec<CandidateFailure>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /score-prediction
///
/// Scores one resume against a job description.
pub async fn handle_score_prediction(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScorePredictionResponse>, AppError> {
    let form = read_form(multipart).await?;
    let resume = form
        .resumes
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    let jd_text = job_description_text(form.jd_file, form.jd_text_input).await?;
    let resume_text = extract_upload(resume).await.map_err(PipelineError::from)?;

    let job = state.pipeline.profile_job(jd_text);
    let evaluation = state.pipeline.evaluate(&resume_text, &job).await?;

    let data = MatchData {
        resume_skills: evaluation.resume_skills.aliases().map(String::from).collect(),
        jd_skills: job.skills.aliases().map(String::from).collect(),
        tfidf_similarity: evaluation.features.lexical_score,
        bert_similarity: evaluation.features.semantic_score,
        matched_skills: display_aliases(&evaluation.skills.matched),
        missing_skills: display_aliases(&evaluation.skills.missing),
        score: evaluation.display_score(),
        category: evaluation.category.clone(),
    };

    Ok(Json(ScorePredictionResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data,
    }))
}

/// POST /rank-resumes
///
/// Scores every uploaded resume against one job description and returns them
/// best-first. Unreadable or failing resumes follow the configured policy.
pub async fn handle_rank_resumes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RankResponse>, AppError> {
    let form = read_form(multipart).await?;
    let jd_text = job_description_text(form.jd_file, form.jd_text_input).await?;
    let job = Arc::new(state.pipeline.profile_job(jd_text));

    let mut candidates = Vec::with_capacity(form.resumes.len());
    for upload in form.resumes {
        let id = upload.file_name.clone();
        candidates.push(Candidate {
            id,
            text: extract_upload(upload).await,
        });
    }
    info!("Ranking {} resumes", candidates.len());

    let outcome =
        rank_candidates(state.pipeline.clone(), job, candidates, state.ranking).await?;

    Ok(Json(RankResponse {
        message: SUCCESS_MESSAGE.to_string(),
        results: outcome.results,
        failures: outcome.failures,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();

        match name.as_str() {
            "resume" | "resumes" | "jd_file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                // Browsers send an empty part when no file was picked.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                let upload = Upload { file_name, bytes };
                if name == "jd_file" {
                    form.jd_file = Some(upload);
                } else {
                    form.resumes.push(upload);
                }
            }
            "jd_text_input" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                form.jd_text_input = Some(text);
            }
            other => debug!("Ignoring multipart field '{other}'"),
        }
    }

    Ok(form)
}

/// Extracts off the async runtime; PDF parsing is CPU-bound.
async fn extract_upload(upload: Upload) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_named(&upload.file_name, &upload.bytes))
        .await
        .unwrap_or_else(|e| Err(ExtractError::Pdf(format!("reader crashed: {e}"))))
}

async fn job_description_text(
    jd_file: Option<Upload>,
    inline: Option<String>,
) -> Result<String, PipelineError> {
    let from_file = match jd_file {
        Some(upload) => Some(extract_upload(upload).await?),
        None => None,
    };
    resolve_job_description(from_file, inline)
}

fn display_aliases(hits: &[SkillHit]) -> Vec<String> {
    hits.iter().map(|hit| hit.alias.clone()).collect()
}
