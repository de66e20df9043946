//! Semantic similarity: encode both texts, then cosine on the dense vectors.

use std::sync::Arc;

use crate::similarity::embedder::{Embedder, EmbeddingError};

/// Cosine similarity of two vectors, accumulated in f64.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

#[derive(Clone)]
pub struct SemanticScorer {
    embedder: Arc<dyn Embedder>,
}

impl SemanticScorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Embeds both texts in one batch and returns their cosine, clamped to [0, 1].
    ///
    /// Blank text scores 0.0 and is never sent to the encoder.
    pub async fn similarity(&self, a: &str, b: &str) -> Result<f64, EmbeddingError> {
        if a.trim().is_empty() || b.trim().is_empty() {
            return Ok(0.0);
        }
        let vectors = self.embedder.encode_batch(&[a, b]).await?;
        let [first, second] = vectors.as_slice() else {
            return Err(EmbeddingError::CountMismatch {
                expected: 2,
                actual: vectors.len(),
            });
        };
        Ok(cosine_similarity(first, second)?.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::similarity::embedder::HashingEmbedder;

    /// Returns canned vectors keyed by text.
    struct StubEmbedder;

    #[async_trait]
    impl Embedder for StubEmbedder {
        fn dimension(&self) -> usize {
            2
        }

        async fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts
                .iter()
                .map(|t| match *t {
                    "north" => vec![0.0, 1.0],
                    "south" => vec![0.0, -1.0],
                    "east" => vec![1.0, 0.0],
                    "northeast" => vec![1.0, 1.0],
                    _ => vec![0.0, 0.0],
                })
                .collect())
        }
    }

    /// Gives every input the same non-zero vector, blank text included.
    struct ConstantEmbedder;

    #[async_trait]
    impl Embedder for ConstantEmbedder {
        fn dimension(&self) -> usize {
            2
        }

        async fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts.iter().map(|_| vec![0.3, 0.4]).collect())
        }
    }

    struct ShortEmbedder;

    #[async_trait]
    impl Embedder for ShortEmbedder {
        fn dimension(&self) -> usize {
            2
        }

        async fn encode_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(vec![vec![1.0, 0.0]])
        }
    }

    fn stub() -> SemanticScorer {
        SemanticScorer::new(Arc::new(StubEmbedder))
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch_errors() {
        assert!(cosine_similarity(&[1.0], &[1.0, 0.0]).is_err());
    }

    #[tokio::test]
    async fn test_identical_vectors_score_one() {
        let score = stub().similarity("north", "north").await.unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_partial_alignment() {
        let score = stub().similarity("north", "northeast").await.unwrap();
        assert!((score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_opposite_vectors_clamped_to_zero() {
        let score = stub().similarity("north", "south").await.unwrap();
        assert_eq!(score, 0.0);
    }

    #[tokio::test]
    async fn test_zero_vector_scores_zero() {
        let score = stub().similarity("west", "east").await.unwrap();
        assert_eq!(score, 0.0);
    }

    #[tokio::test]
    async fn test_blank_text_scores_zero_whatever_the_encoder_returns() {
        let scorer = SemanticScorer::new(Arc::new(ConstantEmbedder));
        let jd = "Python and Docker engineer";
        assert_eq!(scorer.similarity("", jd).await.unwrap(), 0.0);
        assert_eq!(scorer.similarity(jd, "  \n ").await.unwrap(), 0.0);
        assert!(scorer.similarity("Rust", jd).await.unwrap() > 0.99);
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_the_encoder() {
        // ShortEmbedder would fail the batch if it were called.
        let scorer = SemanticScorer::new(Arc::new(ShortEmbedder));
        assert_eq!(scorer.similarity("", "").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_wrong_batch_size_is_an_error() {
        let scorer = SemanticScorer::new(Arc::new(ShortEmbedder));
        let err = scorer.similarity("a", "b").await.unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::CountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_identical_texts_with_hashing_embedder() {
        let scorer = SemanticScorer::new(Arc::new(HashingEmbedder::new(384)));
        let text = "Python developer with Docker and Kubernetes";
        let score = scorer.similarity(text, text).await.unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }
}
