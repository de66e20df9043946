//! Axum route handlers for browsing the skill catalog.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillQuery {
    pub alias: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillEntry {
    pub skill: String,
    pub aliases: Vec<String>,
}

/// GET /skills
/// GET /skills?alias=k8s
///
/// Without a query: every canonical skill with its aliases, in declaration
/// order. With `alias`: the single skill that alias resolves to.
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillQuery>,
) -> Result<Json<Vec<SkillEntry>>, AppError> {
    let table = state.pipeline.canonicalizer().table();

    let entry = |skill: &str| SkillEntry {
        skill: skill.to_string(),
        aliases: table.aliases_of(skill).map(<[String]>::to_vec).unwrap_or_default(),
    };

    match query.alias {
        Some(alias) => {
            let skill = table
                .resolve(&alias)
                .ok_or_else(|| AppError::NotFound(format!("No skill for alias '{alias}'")))?;
            Ok(Json(vec![entry(skill)]))
        }
        None => Ok(Json(table.skills().map(entry).collect())),
    }
}
