//! Match pipeline: one resume against one job description.
//!
//! Flow: lexical + semantic similarity → skill extraction → feature record →
//! score predictor → category predictor → label decoder.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::scoring::features::{
    compare_skills, round_to, FeatureRecord, SimilarityPair, SkillComparison,
};
use crate::scoring::predictor::Predictors;
use crate::scoring::PipelineError;
use crate::similarity::embedder::Embedder;
use crate::similarity::lexical::tfidf_similarity;
use crate::similarity::semantic::SemanticScorer;
use crate::skills::alias_table::AliasTable;
use crate::skills::canonicalizer::{SkillCanonicalizer, SkillMatchSet};

/// Picks the job description text: an uploaded file wins over inline text.
/// Blank inline text counts as absent.
pub fn resolve_job_description(
    from_file: Option<String>,
    inline: Option<String>,
) -> Result<String, PipelineError> {
    match (from_file, inline) {
        (Some(text), _) => Ok(text),
        // Whitespace-only inline text is treated as not provided.
        (None, Some(text)) if !text.trim().is_empty() => Ok(text),
        _ => Err(PipelineError::MissingJobDescription),
    }
}

/// A job description with its skills extracted once, shared across candidates.
#[derive(Debug, Clone)]
pub struct JobProfile {
    pub text: String,
    pub skills: SkillMatchSet,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub resume_skills: SkillMatchSet,
    /// Similarities here are rounded to two decimals, the same values the
    /// predictors saw.
    pub features: FeatureRecord,
    pub skills: SkillComparison,
    /// Raw predictor output.
    pub predicted_score: f64,
    pub category: String,
}

impl Evaluation {
    /// Predicted score rounded to a whole number, for display and ranking.
    pub fn display_score(&self) -> f64 {
        round_to(self.predicted_score, 0)
    }
}

#[derive(Clone)]
pub struct MatchPipeline {
    canonicalizer: SkillCanonicalizer,
    semantic: SemanticScorer,
    predictors: Predictors,
}

impl MatchPipeline {
    pub fn new(
        table: Arc<AliasTable>,
        embedder: Arc<dyn Embedder>,
        predictors: Predictors,
    ) -> Self {
        Self {
            canonicalizer: SkillCanonicalizer::new(table),
            semantic: SemanticScorer::new(embedder),
            predictors,
        }
    }

    pub fn canonicalizer(&self) -> &SkillCanonicalizer {
        &self.canonicalizer
    }

    pub fn profile_job(&self, jd_text: String) -> JobProfile {
        let skills = self.canonicalizer.extract(&jd_text);
        if skills.is_empty() {
            warn!("Job description mentions no known skills; skill features will be zero");
        }
        JobProfile {
            text: jd_text,
            skills,
        }
    }

    /// Runs the whole pipeline for one resume. Either every field is produced
    /// or an error is returned; there is no partial evaluation.
    pub async fn evaluate(
        &self,
        resume_text: &str,
        job: &JobProfile,
    ) -> Result<Evaluation, PipelineError> {
        let lexical = tfidf_similarity(resume_text, &job.text);
        let semantic = self.semantic.similarity(resume_text, &job.text).await?;

        let resume_skills = self.canonicalizer.extract(resume_text);
        let skills = compare_skills(&resume_skills, &job.skills);
        let features = FeatureRecord::new(SimilarityPair { lexical, semantic }, &skills);

        let predicted_score = self.predictors.score.predict(&features.score_input())?;
        let code = self
            .predictors
            .category
            .predict(&features.category_input(predicted_score))?;
        let category = self.predictors.labels.decode(code)?;

        debug!(
            resume_skills = resume_skills.len(),
            lexical = features.lexical_score,
            semantic = features.semantic_score,
            matched = features.matched_skill_count,
            missing = features.missing_skill_count,
            predicted_score,
            %category,
            "Evaluated resume"
        );

        Ok(Evaluation {
            resume_skills,
            features,
            skills,
            predicted_score,
            category,
        })
    }
}
