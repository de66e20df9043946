//! Lexical similarity: TF-IDF cosine over a two-document corpus.
//!
//! Weighting follows the common vectorizer defaults:
//! - tokens are runs of 2+ word characters (alphanumeric or `_`), lowercased
//! - tf is the raw count
//! - idf = ln((1 + n) / (1 + df)) + 1 with n = 2, df counted over these two texts only
//! - each vector is L2-normalised before the dot product
//!
//! No stemming or stopword removal.

use std::collections::HashMap;

const CORPUS_SIZE: f64 = 2.0;

/// Splits lowercased text into tokens of at least two word characters.
pub fn tokenize(lowered: &str) -> impl Iterator<Item = &str> {
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().nth(1).is_some())
}

fn term_counts(lowered: &str) -> HashMap<&str, f64> {
    let mut counts = HashMap::new();
    for token in tokenize(lowered) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn smooth_idf(document_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency)).ln() + 1.0
}

/// Cosine similarity of the TF-IDF vectors of `a` and `b`, clamped to [0, 1].
///
/// Returns 0.0 when either text has no tokens or they share no vocabulary.
pub fn tfidf_similarity(a: &str, b: &str) -> f64 {
    let lowered_a = a.to_lowercase();
    let lowered_b = b.to_lowercase();
    let counts_a = term_counts(&lowered_a);
    let counts_b = term_counts(&lowered_b);

    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let weight = |term: &str, tf: f64| {
        let df = match (counts_a.contains_key(term), counts_b.contains_key(term)) {
            (true, true) => 2.0,
            _ => 1.0,
        };
        tf * smooth_idf(df)
    };

    let norm = |counts: &HashMap<&str, f64>| {
        counts
            .iter()
            .map(|(term, &tf)| weight(*term, tf).powi(2))
            .sum::<f64>()
            .sqrt()
    };

    let dot: f64 = counts_a
        .iter()
        .filter_map(|(term, &tf_a)| {
            counts_b
                .get(term)
                .map(|&tf_b| weight(*term, tf_a) * weight(*term, tf_b))
        })
        .sum();

    let denominator = norm(&counts_a) * norm(&counts_b);
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}
