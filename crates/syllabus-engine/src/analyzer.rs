//! Single-document analysis pipeline
//!
//! Validates the input path, derives course metadata from the file name,
//! extracts and segments the text, then scores sections and readability
//! before aggregating the report. Input errors short-circuit before any
//! extraction or scoring happens.

use crate::cancel::CancelToken;
use crate::config::EngineConfig;
use crate::detector::{search, SearchHit, SectionDetector};
use crate::error::AnalysisError;
use crate::filename::{file_stem, parse_filename};
use crate::readability::{ReadabilityEvaluator, ReadabilityMetrics, TextStatistics};
use crate::report::AnalysisReport;
use crate::scoring::{LexicalScorer, SimilarityScorer};
use crate::segment::Segmenter;
use crate::spelling::{Dictionary, SpellChecker, SpellingReport};
use shared_pdf::{is_no_text_placeholder, PdfPageExtractor, PdfTextExtractor};
use shared_types::CourseInfo;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Analysis entry point
///
/// Holds its collaborators behind `Arc` so one analyzer can be cloned into
/// worker threads. Nothing is cached between calls.
#[derive(Clone)]
pub struct SyllabusAnalyzer {
    scorer: Arc<dyn SimilarityScorer>,
    metrics: Arc<dyn ReadabilityMetrics>,
    extractor: Arc<dyn PdfTextExtractor>,
    config: EngineConfig,
}

impl SyllabusAnalyzer {
    pub fn new(
        scorer: Arc<dyn SimilarityScorer>,
        metrics: Arc<dyn ReadabilityMetrics>,
        extractor: Arc<dyn PdfTextExtractor>,
        config: EngineConfig,
    ) -> Self {
        Self {
            scorer,
            metrics,
            extractor,
            config,
        }
    }

    /// Analyzer backed by the built-in scorer, metrics and PDF extractor
    pub fn with_defaults(config: EngineConfig) -> Self {
        Self::with_scorer(Arc::new(LexicalScorer::new()), config)
    }

    /// Built-in metrics and PDF extractor around a custom scorer
    pub fn with_scorer(scorer: Arc<dyn SimilarityScorer>, config: EngineConfig) -> Self {
        Self::new(
            scorer,
            Arc::new(TextStatistics::new()),
            Arc::new(PdfPageExtractor::new()),
            config,
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyze(&self, path: &Path) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_with_cancel(path, &CancelToken::new())
    }

    pub fn analyze_with_cancel(
        &self,
        path: &Path,
        cancel: &CancelToken,
    ) -> Result<AnalysisReport, AnalysisError> {
        let course = self.course_info(path)?;
        info!(
            course = %course.course,
            instructor = %course.instructor,
            level = course.course_level,
            "Analyzing syllabus"
        );

        let text = self.extract_text(path)?;
        let report = self.analyze_text_with_cancel(course, &text, cancel)?;

        info!(
            course = %report.course.course,
            total = report.total_score,
            grade = %report.grade_band,
            "Analysis complete"
        );
        Ok(report)
    }

    /// Report text on success, the error's message otherwise
    pub fn analyze_to_string(&self, path: &Path) -> String {
        match self.analyze(path) {
            Ok(report) => report.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Analyze already-extracted text
    pub fn analyze_text(
        &self,
        course: CourseInfo,
        text: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_text_with_cancel(course, text, &CancelToken::new())
    }

    pub fn analyze_text_with_cancel(
        &self,
        course: CourseInfo,
        text: &str,
        cancel: &CancelToken,
    ) -> Result<AnalysisReport, AnalysisError> {
        let sentences = self.segmenter().segment(text);
        if sentences.is_empty() {
            warn!(course = %course.course, "No analyzable text; every section will be missing");
        }

        let sections =
            SectionDetector::new(self.scorer.as_ref(), self.config.threshold).detect(&sentences, cancel)?;
        let readability =
            ReadabilityEvaluator::new(self.metrics.as_ref()).evaluate(&sentences, course.course_level)?;

        Ok(AnalysisReport::aggregate(
            course,
            sections,
            readability,
            sentences.len(),
            self.config.scoring_variant,
        ))
    }

    /// Segmented sentences of a document, for follow-up queries
    pub fn sentences(&self, path: &Path) -> Result<Vec<String>, AnalysisError> {
        check_input(path)?;
        let text = self.extract_text(path)?;
        Ok(self.segmenter().segment(&text))
    }

    /// Best sentence for an ad-hoc query over already-segmented text
    pub fn search(
        &self,
        sentences: &[String],
        query: &str,
    ) -> Result<Option<SearchHit>, AnalysisError> {
        search(self.scorer.as_ref(), sentences, query)
    }

    /// Flag possible misspellings in a document's extracted text
    ///
    /// Unlike [`Self::analyze`], the file name does not need to follow the
    /// course naming pattern.
    pub fn spellcheck(
        &self,
        path: &Path,
        dictionary: &dyn Dictionary,
    ) -> Result<SpellingReport, AnalysisError> {
        check_input(path)?;
        let text = self.extract_text(path)?;
        let report = SpellChecker::new(dictionary).check(&text);
        info!(flagged = report.total(), "Spell check complete");
        Ok(report)
    }

    fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.config.min_sentence_words)
    }

    fn course_info(&self, path: &Path) -> Result<CourseInfo, AnalysisError> {
        check_input(path)?;
        parse_filename(&file_stem(path))
    }

    /// Page text joined with newlines; no-text markers are dropped
    fn extract_text(&self, path: &Path) -> Result<String, AnalysisError> {
        let pages = self.extractor.extract(path)?;
        let total = pages.len();
        let pages: Vec<String> = pages
            .into_iter()
            .filter(|page| !is_no_text_placeholder(page))
            .collect();
        tracing::debug!(pages = total, blank = total - pages.len(), "Extracted text");
        Ok(pages.join("\n"))
    }
}

fn check_input(path: &Path) -> Result<(), AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::InputNotFound(path.display().to_string()));
    }

    let is_pdf = path
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(AnalysisError::UnsupportedFormat(path.display().to_string()));
    }

    Ok(())
}
