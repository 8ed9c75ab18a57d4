//! Semantic section-presence detection
//!
//! For every required section each keyword query is scored against every
//! sentence. The best probability per keyword is kept, and the best keyword
//! decides the section score and its evidence sentence. A section is found
//! when that score reaches the global threshold.

use crate::cancel::CancelToken;
use crate::error::AnalysisError;
use crate::scoring::{sigmoid, SimilarityScorer};
use crate::sections::RequiredSection;
use shared_types::SectionResult;

/// Presence threshold applied uniformly to every section
pub const DEFAULT_THRESHOLD: f32 = 0.4;

/// Found/missing cutoff for ad-hoc follow-up queries
pub const DEFAULT_SEARCH_THRESHOLD: f32 = 0.35;

/// Best sentence for an ad-hoc query
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchHit {
    pub query: String,
    pub sentence: String,
    pub index: usize,
    pub score: f32,
}

impl SearchHit {
    pub fn is_match(&self, threshold: f32) -> bool {
        self.score >= threshold
    }
}

/// Highest-probability sentence for one query
///
/// Sentences must already be lowercased. Ties keep the earliest sentence.
/// Returns `None` when there is nothing to score.
pub fn best_match(
    scorer: &dyn SimilarityScorer,
    query: &str,
    lowered: &[&str],
) -> Result<Option<(usize, f32)>, AnalysisError> {
    if lowered.is_empty() {
        return Ok(None);
    }

    let logits = scorer.score_batch(&query.to_lowercase(), lowered)?;
    if logits.len() != lowered.len() {
        return Err(AnalysisError::Scorer(format!(
            "expected {} logits for '{}', got {}",
            lowered.len(),
            query,
            logits.len()
        )));
    }

    let mut best: Option<(usize, f32)> = None;
    for (idx, logit) in logits.into_iter().enumerate() {
        let probability = sigmoid(logit);
        if probability.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, top)| probability > top) {
            best = Some((idx, probability));
        }
    }

    Ok(best)
}

/// Find the sentence that best answers a free-form query
pub fn search(
    scorer: &dyn SimilarityScorer,
    sentences: &[String],
    query: &str,
) -> Result<Option<SearchHit>, AnalysisError> {
    let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
    let lowered_refs: Vec<&str> = lowered.iter().map(String::as_str).collect();

    Ok(best_match(scorer, query, &lowered_refs)?.map(|(index, score)| SearchHit {
        query: query.to_string(),
        sentence: sentences[index].clone(),
        index,
        score,
    }))
}

/// Scores required sections against a document's sentences
pub struct SectionDetector<'a> {
    scorer: &'a dyn SimilarityScorer,
    threshold: f32,
}

impl<'a> SectionDetector<'a> {
    pub fn new(scorer: &'a dyn SimilarityScorer, threshold: f32) -> Self {
        Self { scorer, threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Evaluate every required section, checking for cancellation between sections
    pub fn detect(
        &self,
        sentences: &[String],
        cancel: &CancelToken,
    ) -> Result<Vec<SectionResult>, AnalysisError> {
        let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
        let lowered_refs: Vec<&str> = lowered.iter().map(String::as_str).collect();

        let mut results = Vec::with_capacity(RequiredSection::ALL.len());
        for section in RequiredSection::ALL {
            if cancel.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }
            results.push(self.detect_section(section, sentences, &lowered_refs)?);
        }

        Ok(results)
    }

    fn detect_section(
        &self,
        section: RequiredSection,
        sentences: &[String],
        lowered: &[&str],
    ) -> Result<SectionResult, AnalysisError> {
        let spec = section.spec();

        // (keyword, sentence index, probability); earlier keywords win ties
        let mut best: Option<(&str, usize, f32)> = None;
        for &keyword in spec.keywords {
            if let Some((idx, probability)) = best_match(self.scorer, keyword, lowered)? {
                if best.map_or(true, |(_, _, top)| probability > top) {
                    best = Some((keyword, idx, probability));
                }
            }
        }

        let (best_keyword, best_sentence, score) = match best {
            Some((keyword, idx, probability)) => {
                (Some(keyword.to_string()), sentences[idx].clone(), probability)
            }
            None => (None, String::new(), 0.0),
        };
        let found = score >= self.threshold;

        tracing::debug!(
            section = spec.name,
            score,
            found,
            keyword = best_keyword.as_deref().unwrap_or("-"),
            "Scored section"
        );

        Ok(SectionResult {
            section: spec.name.to_string(),
            found,
            score,
            best_sentence,
            best_keyword,
            recommendation: spec.recommendation.to_string(),
            kudos: spec.kudos.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{LexicalScorer, ScoreFn};
    use pretty_assertions::assert_eq;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_document_marks_everything_missing() {
        let scorer = ScoreFn(|_: &str, _: &str| -> f32 { panic!("scorer must not be called") });
        let detector = SectionDetector::new(&scorer, DEFAULT_THRESHOLD);

        let results = detector.detect(&[], &CancelToken::new()).unwrap();
        assert_eq!(results.len(), RequiredSection::ALL.len());
        for result in results {
            assert!(!result.found);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.best_sentence, "");
            assert_eq!(result.best_keyword, None);
        }
    }

    #[test]
    fn test_academic_integrity_detected_with_high_logit() {
        let scorer = ScoreFn(|q: &str, s: &str| -> f32 {
            if q == "academic integrity" && s.contains("academic integrity") {
                6.0
            } else {
                -6.0
            }
        });
        let detector = SectionDetector::new(&scorer, DEFAULT_THRESHOLD);
        let doc = sentences(&[
            "Welcome to the course.",
            "Students must adhere to the academic integrity policy and avoid plagiarism.",
        ]);

        let results = detector.detect(&doc, &CancelToken::new()).unwrap();
        let integrity = results
            .iter()
            .find(|r| r.section == "Academic Integrity Statement")
            .unwrap();

        assert!(integrity.found);
        assert!(integrity.score >= DEFAULT_THRESHOLD);
        assert_eq!(
            integrity.best_sentence,
            "Students must adhere to the academic integrity policy and avoid plagiarism."
        );
        assert_eq!(integrity.best_keyword.as_deref(), Some("academic integrity"));
        assert_eq!(results.iter().filter(|r| r.found).count(), 1);
    }

    #[test]
    fn test_ties_keep_first_sentence() {
        let scorer = ScoreFn(|_: &str, _: &str| -> f32 { 2.0 });
        let doc = sentences(&["First candidate line.", "Second candidate line."]);
        let lowered: Vec<&str> = vec!["first candidate line.", "second candidate line."];

        let best = best_match(&scorer, "anything", &lowered).unwrap();
        assert_eq!(best.map(|(idx, _)| idx), Some(0));

        let detector = SectionDetector::new(&scorer, DEFAULT_THRESHOLD);
        let results = detector.detect(&doc, &CancelToken::new()).unwrap();
        for result in &results {
            assert_eq!(result.best_sentence, "First candidate line.");
        }
        // Equal keyword maxima keep the first keyword
        assert_eq!(results[0].best_keyword.as_deref(), Some("instructor email"));
    }

    #[test]
    fn test_queries_and_sentences_are_lowercased() {
        let scorer = ScoreFn(|q: &str, s: &str| -> f32 {
            assert_eq!(q, q.to_lowercase());
            assert_eq!(s, s.to_lowercase());
            0.0
        });
        let hit = search(&scorer, &sentences(&["OFFICE HOURS: Monday"]), "Office Hours")
            .unwrap()
            .unwrap();
        // Original casing is preserved in the evidence
        assert_eq!(hit.sentence, "OFFICE HOURS: Monday");
        assert_eq!(hit.score, 0.5);
    }

    #[test]
    fn test_search_on_empty_sentences() {
        assert_eq!(search(&LexicalScorer::new(), &[], "attendance").unwrap(), None);
    }

    #[test]
    fn test_search_threshold_verdict() {
        let doc = sentences(&[
            "Attendance is taken at the start of every lecture.",
            "Bring a laptop to lab.",
        ]);
        let hit = search(&LexicalScorer::new(), &doc, "attendance").unwrap().unwrap();
        assert_eq!(hit.index, 0);
        assert!(hit.is_match(DEFAULT_SEARCH_THRESHOLD));
    }

    #[test]
    fn test_mismatched_batch_length_is_an_error() {
        struct ShortScorer;
        impl SimilarityScorer for ShortScorer {
            fn score(&self, _: &str, _: &str) -> Result<f32, AnalysisError> {
                Ok(0.0)
            }
            fn score_batch(&self, _: &str, _: &[&str]) -> Result<Vec<f32>, AnalysisError> {
                Ok(vec![])
            }
        }

        let result = best_match(&ShortScorer, "exam", &["final exam week"]);
        assert!(matches!(result, Err(AnalysisError::Scorer(_))));
    }

    #[test]
    fn test_cancelled_before_first_section() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let detector = SectionDetector::new(&LexicalScorer, DEFAULT_THRESHOLD);

        let result = detector.detect(&sentences(&["Office hours are Monday."]), &cancel);
        assert_eq!(result, Err(AnalysisError::Cancelled));
    }

    #[test]
    fn test_lexical_scorer_finds_common_sections() {
        let doc = sentences(&[
            "Office hours are held Tuesdays from 2 to 4 pm in Room 210.",
            "Your final grade is based on homework, quizzes, and two exams.",
            "All students are expected to uphold academic integrity.",
        ]);
        let detector = SectionDetector::new(&LexicalScorer, DEFAULT_THRESHOLD);
        let results = detector.detect(&doc, &CancelToken::new()).unwrap();

        let found: Vec<&str> = results
            .iter()
            .filter(|r| r.found)
            .map(|r| r.section.as_str())
            .collect();
        assert!(found.contains(&"Office Hours"));
        assert!(found.contains(&"Grading Policy"));
        assert!(found.contains(&"Exam Policy"));
        assert!(found.contains(&"Academic Integrity Statement"));
        assert!(!found.contains(&"Counseling and Psychological Services"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::scoring::LexicalScorer;
    use proptest::prelude::*;

    proptest! {
        /// Property: raising the threshold never increases the found count
        #[test]
        fn threshold_is_monotone(
            doc in proptest::collection::vec("[a-z ]{3,60}", 0..12),
            low in 0.0f32..1.0,
            delta in 0.0f32..0.5,
        ) {
            let high = (low + delta).min(1.0);
            let cancel = CancelToken::new();

            let found = |threshold: f32| {
                SectionDetector::new(&LexicalScorer, threshold)
                    .detect(&doc, &cancel)
                    .unwrap()
                    .iter()
                    .filter(|r| r.found)
                    .count()
            };

            prop_assert!(found(high) <= found(low));
        }

        /// Property: section scores are probabilities
        #[test]
        fn scores_are_probabilities(doc in proptest::collection::vec("\\PC{0,80}", 0..8)) {
            let results = SectionDetector::new(&LexicalScorer, DEFAULT_THRESHOLD)
                .detect(&doc, &CancelToken::new())
                .unwrap();
            for result in results {
                prop_assert!((0.0..=1.0).contains(&result.score));
            }
        }
    }
}
