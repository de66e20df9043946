//! Feature Aggregator: turns similarity scores and skill sets into the fixed
//! feature layout the predictors were trained on.
//!
//! Layout (order is part of the predictor contract):
//!   score input    = [lexical, semantic, matched_count, missing_count]
//!   category input = [lexical, semantic, matched_count, missing_count, predicted_score]

use serde::Serialize;

use crate::scoring::PipelineError;
use crate::skills::canonicalizer::SkillMatchSet;

pub const SCORE_FEATURE_COUNT: usize = 4;
pub const CATEGORY_FEATURE_COUNT: usize = 5;

/// Rounds half-to-even at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityPair {
    pub lexical: f64,
    pub semantic: f64,
}

/// A canonical skill and the literal alias shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillHit {
    pub skill: String,
    pub alias: String,
}

/// JD skills split into those the resume covers and those it lacks,
/// each sorted by canonical skill identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillComparison {
    /// Display alias taken from the resume.
    pub matched: Vec<SkillHit>,
    /// Display alias taken from the job description.
    pub missing: Vec<SkillHit>,
}

pub fn compare_skills(resume: &SkillMatchSet, jd: &SkillMatchSet) -> SkillComparison {
    let mut jd_pairs: Vec<(&str, &str)> = jd.iter().collect();
    jd_pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut comparison = SkillComparison::default();
    for (skill, jd_alias) in jd_pairs {
        match resume.alias_for(skill) {
            Some(resume_alias) => comparison.matched.push(SkillHit {
                skill: skill.to_string(),
                alias: resume_alias.to_string(),
            }),
            None => comparison.missing.push(SkillHit {
                skill: skill.to_string(),
                alias: jd_alias.to_string(),
            }),
        }
    }
    comparison
}

/// Score predictor input. Fixed arity; build from a slice with `try_from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFeatures(pub [f64; SCORE_FEATURE_COUNT]);

/// Category predictor input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryFeatures(pub [f64; CATEGORY_FEATURE_COUNT]);

impl TryFrom<&[f64]> for ScoreFeatures {
    type Error = PipelineError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        values
            .try_into()
            .map(ScoreFeatures)
            .map_err(|_| PipelineError::FeatureContract {
                expected: SCORE_FEATURE_COUNT,
                actual: values.len(),
            })
    }
}

impl TryFrom<&[f64]> for CategoryFeatures {
    type Error = PipelineError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        values
            .try_into()
            .map(CategoryFeatures)
            .map_err(|_| PipelineError::FeatureContract {
                expected: CATEGORY_FEATURE_COUNT,
                actual: values.len(),
            })
    }
}

/// Aggregated features for one resume/JD pair. Similarities are already
/// rounded to two decimals; nothing downstream rounds them again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub lexical_score: f64,
    pub semantic_score: f64,
    pub matched_skill_count: usize,
    pub missing_skill_count: usize,
}

impl FeatureRecord {
    pub fn new(similarity: SimilarityPair, skills: &SkillComparison) -> Self {
        Self {
            lexical_score: round_to(similarity.lexical, 2),
            semantic_score: round_to(similarity.semantic, 2),
            matched_skill_count: skills.matched.len(),
            missing_skill_count: skills.missing.len(),
        }
    }

    pub fn score_input(&self) -> ScoreFeatures {
        ScoreFeatures([
            self.lexical_score,
            self.semantic_score,
            self.matched_skill_count as f64,
            self.missing_skill_count as f64,
        ])
    }

    /// Category input; `predicted_score` is rounded to two decimals here.
    pub fn category_input(&self, predicted_score: f64) -> CategoryFeatures {
        let [lexical, semantic, matched, missing] = self.score_input().0;
        CategoryFeatures([
            lexical,
            semantic,
            matched,
            missing,
            round_to(predicted_score, 2),
        ])
    }
}
