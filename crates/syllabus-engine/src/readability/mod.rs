//! Course-level-sensitive readability evaluation
//!
//! Three metrics are computed over the document's sentences and each is
//! classified against the band for the course level. Every classification
//! carries a penalty (0, -5 or -10) and narrative feedback; the penalties are
//! summed into the report rather than accumulated in shared state.

pub mod bands;
pub mod metrics;

pub use bands::{band_for_level, RangeBand, ReadabilityBand, ReadingEaseBand, BANDS};
pub use metrics::{count_syllables, ReadabilityMetrics, TextCounts, TextStatistics};

use crate::error::AnalysisError;
use shared_types::{Assessment, Metric, MetricAssessment, ReadabilityReport, ReadabilityScores};

/// Evaluates document readability against course-level bands
pub struct ReadabilityEvaluator<'a> {
    metrics: &'a dyn ReadabilityMetrics,
}

impl<'a> ReadabilityEvaluator<'a> {
    pub fn new(metrics: &'a dyn ReadabilityMetrics) -> Self {
        Self { metrics }
    }

    /// Compute metrics over the sentences and classify them
    ///
    /// Sentences are joined with newlines so sentence boundaries survive.
    /// An empty sentence list is still passed to the metrics provider.
    pub fn evaluate(
        &self,
        sentences: &[String],
        course_level: u8,
    ) -> Result<ReadabilityReport, AnalysisError> {
        let band = band_for_level(course_level)?;
        let scores = self.metrics.metrics(&sentences.join("\n"));
        let report = assess(scores, band);

        tracing::debug!(
            course_level,
            reading_ease = scores.reading_ease,
            grade_level = scores.grade_level,
            density_index = scores.density_index,
            penalty = report.penalty,
            "Evaluated readability"
        );

        Ok(report)
    }
}

/// Classify precomputed scores against a band
pub fn assess(scores: ReadabilityScores, band: &ReadabilityBand) -> ReadabilityReport {
    let assessments = vec![
        metric_assessment(
            Metric::ReadingEase,
            scores.reading_ease,
            band.reading_ease.classify(scores.reading_ease),
        ),
        metric_assessment(
            Metric::GradeLevel,
            scores.grade_level,
            band.grade_level.classify(scores.grade_level),
        ),
        metric_assessment(
            Metric::DensityIndex,
            scores.density_index,
            band.density_index.classify(scores.density_index),
        ),
    ];
    let penalty = assessments.iter().map(|a| a.penalty).sum();

    ReadabilityReport {
        course_level: band.course_level,
        scores,
        assessments,
        penalty,
    }
}

fn metric_assessment(metric: Metric, value: f64, assessment: Assessment) -> MetricAssessment {
    let (strength, suggestion) = feedback(metric, assessment);
    MetricAssessment {
        metric,
        value,
        assessment,
        penalty: assessment.penalty(),
        strength: strength.map(str::to_string),
        suggestion: suggestion.map(str::to_string),
    }
}

fn feedback(metric: Metric, assessment: Assessment) -> (Option<&'static str>, Option<&'static str>) {
    match (metric, assessment) {
        (Metric::ReadingEase, Assessment::VeryEasy) => (
            Some("The syllabus is very easy to read."),
            Some("Make sure policies are still stated with enough precision."),
        ),
        (Metric::ReadingEase, Assessment::Comfortable) => (
            Some("The syllabus reads comfortably for this course level."),
            None,
        ),
        (Metric::ReadingEase, Assessment::SlightlyChallenging) => (
            None,
            Some("Some passages are slightly challenging; shorten long sentences where possible."),
        ),
        (Metric::ReadingEase, _) => (
            None,
            Some("The text is hard to read; break up long sentences and prefer plain words."),
        ),
        (Metric::GradeLevel, Assessment::BelowRange) => (
            Some("Sentences are simpler than typical for this course level."),
            None,
        ),
        (Metric::GradeLevel, Assessment::WithinRange) => (
            Some("Sentence complexity fits the course level."),
            None,
        ),
        (Metric::GradeLevel, _) => (
            None,
            Some("The grade level is too advanced; split compound sentences and trim clauses."),
        ),
        (Metric::DensityIndex, Assessment::BelowRange) => (
            Some("Vocabulary is light on long, complex words."),
            None,
        ),
        (Metric::DensityIndex, Assessment::WithinRange) => (
            Some("Vocabulary density fits the course level."),
            None,
        ),
        (Metric::DensityIndex, _) => (
            None,
            Some("The text is dense with complex words; replace jargon with everyday terms where you can."),
        ),
    }
}
