//! Query-to-sentence relevance scoring
//!
//! The engine treats the similarity model as a black box that returns a raw
//! relevance logit for a (query, sentence) pair. Logits are turned into
//! probabilities with [`sigmoid`] before any threshold is applied.
//!
//! [`LexicalScorer`] is the built-in scorer: deterministic term coverage with
//! a light suffix stemmer. Model-backed scorers (cross-encoders, embedding
//! similarity) plug in through the same trait.

use crate::error::AnalysisError;
use std::collections::HashSet;

/// Relevance scorer over (query, sentence) pairs
///
/// Implementations must support concurrent read access: one scorer is shared
/// behind an `Arc` by every analysis a host process runs.
pub trait SimilarityScorer: Send + Sync {
    /// Raw relevance logit for a single pair
    fn score(&self, query: &str, sentence: &str) -> Result<f32, AnalysisError>;

    /// One logit per sentence, in input order
    fn score_batch(&self, query: &str, sentences: &[&str]) -> Result<Vec<f32>, AnalysisError> {
        sentences.iter().map(|s| self.score(query, s)).collect()
    }
}

/// Logistic function mapping a logit to a probability in [0, 1]
pub fn sigmoid(logit: f32) -> f32 {
    1.0 / (1.0 + (-logit).exp())
}

/// Adapter that turns a plain function into a scorer
pub struct ScoreFn<F>(pub F);

impl<F> SimilarityScorer for ScoreFn<F>
where
    F: Fn(&str, &str) -> f32 + Send + Sync,
{
    fn score(&self, query: &str, sentence: &str) -> Result<f32, AnalysisError> {
        Ok((self.0)(query, sentence))
    }
}

/// Words ignored when measuring term coverage
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "is", "it", "of", "on",
    "or", "the", "to", "will", "with", "your", "you", "this", "that", "all",
];

// Logit shape: no coverage sits far below 0.4, full coverage above it
const COVERAGE_WEIGHT: f32 = 4.0;
const PHRASE_BONUS: f32 = 1.5;
const BIAS: f32 = -3.0;

/// Deterministic term-coverage scorer
///
/// The logit grows with the fraction of query terms present in the sentence
/// (matched exactly or by shared stem) and gets a bonus when the whole query
/// occurs verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalScorer;

impl LexicalScorer {
    pub fn new() -> Self {
        Self
    }

    fn logit(query: &str, sentence: &str) -> f32 {
        let query_terms = terms(query);
        if query_terms.is_empty() {
            return BIAS;
        }

        let sentence_terms: HashSet<String> = terms(sentence).into_iter().collect();
        let sentence_stems: HashSet<&str> = sentence_terms.iter().map(|t| stem(t)).collect();

        let matched = query_terms
            .iter()
            .filter(|t| sentence_terms.contains(*t) || sentence_stems.contains(stem(t)))
            .count();
        let coverage = matched as f32 / query_terms.len() as f32;

        let query_lower = query.trim().to_lowercase();
        let phrase = if !query_lower.is_empty() && sentence.to_lowercase().contains(&query_lower) {
            PHRASE_BONUS
        } else {
            0.0
        };

        COVERAGE_WEIGHT * coverage + phrase + BIAS
    }
}

impl SimilarityScorer for LexicalScorer {
    fn score(&self, query: &str, sentence: &str) -> Result<f32, AnalysisError> {
        Ok(Self::logit(query, sentence))
    }
}

/// Lowercased content terms, deduplicated, in first-seen order
fn terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2 && !STOP_WORDS.contains(t))
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

/// Strip one common English suffix, keeping at least three characters
fn stem(term: &str) -> &str {
    const SUFFIXES: &[&str] = &["ations", "ation", "ings", "ing", "ies", "ed", "es", "s", "e"];

    for suffix in SUFFIXES {
        if let Some(base) = term.strip_suffix(suffix) {
            if base.len() >= 3 {
                return base;
            }
        }
    }
    term
}
