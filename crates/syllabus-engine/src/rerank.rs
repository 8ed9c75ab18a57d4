//! Cross-encoder scorer backed by fastembed's ONNX rerankers
//!
//! Only built with the `fastembed_backend` feature. The first construction
//! downloads the model weights into the fastembed cache.

use crate::error::AnalysisError;
use crate::scoring::SimilarityScorer;
use fastembed::{RerankInitOptions, RerankerModel, TextRerank};
use std::sync::Mutex;

pub struct RerankScorer {
    model: Mutex<TextRerank>,
}

impl RerankScorer {
    pub fn new() -> Result<Self, AnalysisError> {
        Self::with_model(RerankerModel::BGERerankerBase)
    }

    pub fn with_model(model: RerankerModel) -> Result<Self, AnalysisError> {
        tracing::info!(?model, "Loading reranker");
        let model = TextRerank::try_new(RerankInitOptions::new(model))
            .map_err(|e| AnalysisError::Scorer(format!("Failed to load reranker: {}", e)))?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl SimilarityScorer for RerankScorer {
    fn score(&self, query: &str, sentence: &str) -> Result<f32, AnalysisError> {
        self.score_batch(query, &[sentence])?
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::Scorer("Reranker returned no score".to_string()))
    }

    /// Reranker results come back sorted by score; put them back in input order
    fn score_batch(&self, query: &str, sentences: &[&str]) -> Result<Vec<f32>, AnalysisError> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let mut model = self
            .model
            .lock()
            .map_err(|_| AnalysisError::Scorer("Reranker lock poisoned".to_string()))?;
        let results = model
            .rerank(query, sentences.to_vec(), false, None)
            .map_err(|e| AnalysisError::Scorer(e.to_string()))?;

        let mut logits = vec![f32::NEG_INFINITY; sentences.len()];
        for result in results {
            if let Some(slot) = logits.get_mut(result.index) {
                *slot = result.score;
            }
        }
        Ok(logits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rerank_scorer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RerankScorer>();
    }
}
