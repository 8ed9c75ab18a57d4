//! Report aggregation and rendering
//!
//! Combines section results and the readability report into the final
//! grade. The rendered report always follows the same block order:
//! header, content analysis, final summary, missing sections, found
//! sections, recommendations, readability, kudos.

use crate::sections::POINTS_PER_SECTION;
use serde::{Deserialize, Serialize};
use shared_types::{CourseInfo, GradeBand, ReadabilityReport, SectionResult};
use std::fmt;

/// How the headline score is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringVariant {
    /// Grade on section coverage alone; readability is reported but not scored
    #[default]
    ContentOnly,
    /// Subtract the readability penalty from the content score
    WithReadabilityPenalty,
}

impl ScoringVariant {
    pub fn total(&self, content_score: i32, readability_penalty: i32) -> i32 {
        match self {
            ScoringVariant::ContentOnly => content_score,
            ScoringVariant::WithReadabilityPenalty => content_score + readability_penalty,
        }
    }
}

impl std::str::FromStr for ScoringVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "content_only" | "content" => Ok(ScoringVariant::ContentOnly),
            "with_readability_penalty" | "readability" => {
                Ok(ScoringVariant::WithReadabilityPenalty)
            }
            other => Err(format!("Unknown scoring variant: {}", other)),
        }
    }
}

/// Complete analysis of one syllabus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub course: CourseInfo,
    pub sections: Vec<SectionResult>,
    pub readability: ReadabilityReport,
    pub sentence_count: usize,
    pub scoring_variant: ScoringVariant,
    pub content_score: i32,
    pub readability_penalty: i32,
    pub total_score: i32,
    pub grade_band: GradeBand,
}

impl AnalysisReport {
    pub fn aggregate(
        course: CourseInfo,
        sections: Vec<SectionResult>,
        readability: ReadabilityReport,
        sentence_count: usize,
        scoring_variant: ScoringVariant,
    ) -> Self {
        let content_score = sections.iter().filter(|s| s.found).count() as i32 * POINTS_PER_SECTION;
        let readability_penalty = readability.penalty;
        let total_score = scoring_variant.total(content_score, readability_penalty);

        Self {
            course,
            sections,
            readability,
            sentence_count,
            scoring_variant,
            content_score,
            readability_penalty,
            total_score,
            grade_band: GradeBand::from_score(total_score),
        }
    }

    pub fn found_sections(&self) -> impl Iterator<Item = &SectionResult> {
        self.sections.iter().filter(|s| s.found)
    }

    pub fn missing_sections(&self) -> impl Iterator<Item = &SectionResult> {
        self.sections.iter().filter(|s| !s.found)
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course: {}", self.course.course)?;
        writeln!(f, "Instructor: {}", self.course.instructor)?;
        writeln!(f, "Semester: {}", self.course.semester)
    }

    fn write_content_analysis(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Content Analysis Report ---")?;
        for section in &self.sections {
            let status = if section.found { "Found" } else { "Missing" };
            writeln!(f, "{} : {} (score = {:.2})", section.section, status, section.score)?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Final Summary ---")?;
        writeln!(
            f,
            "Sections found: {} of {}",
            self.found_sections().count(),
            self.sections.len()
        )?;
        writeln!(f, "Content score: {}", self.content_score)?;
        match self.scoring_variant {
            ScoringVariant::ContentOnly => writeln!(
                f,
                "Readability penalty: {} (reported only)",
                self.readability_penalty
            )?,
            ScoringVariant::WithReadabilityPenalty => {
                writeln!(f, "Readability penalty: {}", self.readability_penalty)?
            }
        }
        writeln!(f, "Total score: {}", self.total_score)?;
        writeln!(f, "Grade: {}", self.grade_band)
    }

    fn write_section_list<'a>(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        sections: impl Iterator<Item = &'a SectionResult>,
    ) -> fmt::Result {
        writeln!(f, "--- {} ---", title)?;
        let mut empty = true;
        for section in sections {
            writeln!(f, "- {}", section.section)?;
            empty = false;
        }
        if empty {
            writeln!(f, "None")?;
        }
        Ok(())
    }

    fn write_recommendations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Recommendations ---")?;
        let mut empty = true;
        for section in self.missing_sections() {
            writeln!(f, "- {}: {}", section.section, section.recommendation)?;
            empty = false;
        }
        if empty {
            writeln!(f, "All required sections are present.")?;
        }
        Ok(())
    }

    fn write_readability(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Readability Report ---")?;
        writeln!(f, "Course level: {}", self.readability.course_level)?;
        for assessment in &self.readability.assessments {
            let penalty = if assessment.penalty == 0 {
                "no penalty".to_string()
            } else {
                format!("penalty {}", assessment.penalty)
            };
            writeln!(
                f,
                "{}: {:.2} ({}, {})",
                assessment.metric.label(),
                assessment.value,
                assessment.assessment.describe(),
                penalty
            )?;
        }
        writeln!(f, "Readability penalty: {}", self.readability.penalty)?;

        let strengths: Vec<&str> = self
            .readability
            .assessments
            .iter()
            .filter_map(|a| a.strength.as_deref())
            .collect();
        let suggestions: Vec<&str> = self
            .readability
            .assessments
            .iter()
            .filter_map(|a| a.suggestion.as_deref())
            .collect();

        if !strengths.is_empty() {
            writeln!(f, "Strengths:")?;
            for strength in strengths {
                writeln!(f, "- {}", strength)?;
            }
        }
        if !suggestions.is_empty() {
            writeln!(f, "Suggestions:")?;
            for suggestion in suggestions {
                writeln!(f, "- {}", suggestion)?;
            }
        }
        Ok(())
    }

    fn write_kudos(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Kudos ---")?;
        let mut empty = true;
        for section in self.found_sections() {
            writeln!(f, "- {}: {}", section.section, section.kudos)?;
            empty = false;
        }
        if empty {
            writeln!(f, "None yet.")?;
        }
        Ok(())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        writeln!(f)?;
        self.write_content_analysis(f)?;
        writeln!(f)?;
        self.write_summary(f)?;
        writeln!(f)?;
        Self::write_section_list(f, "Missing Sections", self.missing_sections())?;
        writeln!(f)?;
        Self::write_section_list(f, "Found Sections", self.found_sections())?;
        writeln!(f)?;
        self.write_recommendations(f)?;
        writeln!(f)?;
        self.write_readability(f)?;
        writeln!(f)?;
        self.write_kudos(f)
    }
}
