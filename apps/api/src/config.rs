use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::ranking::BatchFailurePolicy;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://resume-score-2q5k.vercel.app";

/// Application configuration loaded from environment variables.
/// Everything has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: Vec<String>,
    /// Base URL of an OpenAI-compatible embeddings API. Unset → local hashing embedder.
    pub embedding_url: Option<String>,
    pub embedding_model: String,
    pub embedding_api_key: Option<String>,
    pub embedding_dim: usize,
    /// JSON file with regressor / classifier / label parameters. Unset → heuristics.
    pub predictor_artifacts: Option<PathBuf>,
    pub ranking_failure_policy: BatchFailurePolicy,
    pub ranking_concurrency: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            allowed_origins: parse_list(DEFAULT_ALLOWED_ORIGINS),
            embedding_url: None,
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            embedding_api_key: None,
            embedding_dim: 384,
            predictor_artifacts: None,
            ranking_failure_policy: BatchFailurePolicy::SkipAndReport,
            ranking_concurrency: 4,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or(defaults.allowed_origins),
            embedding_url: optional_env("EMBEDDING_URL"),
            embedding_model: optional_env("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            embedding_api_key: optional_env("EMBEDDING_API_KEY"),
            embedding_dim: parse_env("EMBEDDING_DIM", defaults.embedding_dim)?,
            predictor_artifacts: optional_env("PREDICTOR_ARTIFACTS").map(PathBuf::from),
            ranking_failure_policy: match optional_env("RANKING_FAILURE_POLICY") {
                Some(v) => v
                    .parse()
                    .map_err(anyhow::Error::msg)
                    .context("RANKING_FAILURE_POLICY must be 'skip' or 'abort'")?,
                None => defaults.ranking_failure_policy,
            },
            ranking_concurrency: parse_env("RANKING_CONCURRENCY", defaults.ranking_concurrency)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{v}'")),
        None => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_drops_empty() {
        assert_eq!(
            parse_list(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.embedding_dim, 384);
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(
            config.ranking_failure_policy,
            BatchFailurePolicy::SkipAndReport
        );
    }

    #[test]
    fn test_parse_env_falls_back_to_default_when_unset() {
        let value: u16 = parse_env("RESUME_SCORE_TEST_SURELY_UNSET_PORT", 4242).unwrap();
        assert_eq!(value, 4242);
    }
}
