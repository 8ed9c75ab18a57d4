use std::fmt;

/// Placeholder used for header fields the filename did not provide
pub const UNKNOWN: &str = "Unknown";

// Grade band floors (content score points)
pub const EXCELLENT_FLOOR: i32 = 120;
pub const GREAT_FLOOR: i32 = 100;
pub const GOOD_FLOOR: i32 = 80;
pub const ADEQUATE_FLOOR: i32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseInfo {
    pub course: String, // e.g., "CMPSC.463"
    pub instructor: String,
    pub semester: String,
    pub course_level: u8, // 0..=4
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionResult {
    pub section: String,
    pub found: bool,
    pub score: f32, // sigmoid probability in [0, 1]
    pub best_sentence: String,
    pub best_keyword: Option<String>,
    pub recommendation: String,
    pub kudos: String,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadabilityScores {
    /// Flesch Reading Ease (higher = simpler)
    pub reading_ease: f64,
    /// Flesch-Kincaid grade level
    pub grade_level: f64,
    /// Gunning Fog index
    pub density_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ReadingEase,
    GradeLevel,
    DensityIndex,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::ReadingEase => "Flesch Reading Ease",
            Metric::GradeLevel => "Flesch-Kincaid Grade Level",
            Metric::DensityIndex => "Gunning Fog Index",
        }
    }
}

/// Classification of a single readability metric against its course-level band
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    // Reading ease bands
    VeryEasy,
    Comfortable,
    SlightlyChallenging,
    Hard,
    // Grade-level style ranges
    BelowRange,
    WithinRange,
    AboveRange,
}

impl Assessment {
    /// Score contribution for this classification (0, -5 or -10)
    pub fn penalty(&self) -> i32 {
        match self {
            Assessment::VeryEasy
            | Assessment::Comfortable
            | Assessment::BelowRange
            | Assessment::WithinRange => 0,
            Assessment::SlightlyChallenging => -5,
            Assessment::Hard | Assessment::AboveRange => -10,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Assessment::VeryEasy => "very easy",
            Assessment::Comfortable => "comfortable",
            Assessment::SlightlyChallenging => "slightly challenging",
            Assessment::Hard => "hard",
            Assessment::BelowRange => "easy",
            Assessment::WithinRange => "appropriate",
            Assessment::AboveRange => "too advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetricAssessment {
    pub metric: Metric,
    pub value: f64,
    pub assessment: Assessment,
    pub penalty: i32,
    pub strength: Option<String>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadabilityReport {
    pub course_level: u8,
    pub scores: ReadabilityScores,
    pub assessments: Vec<MetricAssessment>,
    pub penalty: i32, // sum of assessments, in [-30, 0]
}

/// Overall completeness grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradeBand {
    Incomplete,
    Adequate,
    Good,
    Great,
    Excellent,
}

impl GradeBand {
    pub fn from_score(total_score: i32) -> Self {
        if total_score >= EXCELLENT_FLOOR {
            GradeBand::Excellent
        } else if total_score >= GREAT_FLOOR {
            GradeBand::Great
        } else if total_score >= GOOD_FLOOR {
            GradeBand::Good
        } else if total_score >= ADEQUATE_FLOOR {
            GradeBand::Adequate
        } else {
            GradeBand::Incomplete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "EXCELLENT",
            GradeBand::Great => "GREAT",
            GradeBand::Good => "GOOD",
            GradeBand::Adequate => "ADEQUATE",
            GradeBand::Incomplete => "INCOMPLETE",
        }
    }
}

impl From<i32> for GradeBand {
    fn from(total_score: i32) -> Self {
        GradeBand::from_score(total_score)
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grade_band_floors() {
        assert_eq!(GradeBand::from_score(140), GradeBand::Excellent);
        assert_eq!(GradeBand::from_score(120), GradeBand::Excellent);
        assert_eq!(GradeBand::from_score(119), GradeBand::Great);
        assert_eq!(GradeBand::from_score(100), GradeBand::Great);
        assert_eq!(GradeBand::from_score(85), GradeBand::Good);
        assert_eq!(GradeBand::from_score(60), GradeBand::Adequate);
        assert_eq!(GradeBand::from_score(59), GradeBand::Incomplete);
        assert_eq!(GradeBand::from_score(-30), GradeBand::Incomplete);
    }

    #[test]
    fn test_grade_band_display() {
        assert_eq!(GradeBand::from(85).to_string(), "GOOD");
        assert_eq!(
            serde_json::to_string(&GradeBand::Excellent).unwrap(),
            "\"EXCELLENT\""
        );
    }

    #[test]
    fn test_assessment_penalties() {
        assert_eq!(Assessment::VeryEasy.penalty(), 0);
        assert_eq!(Assessment::Comfortable.penalty(), 0);
        assert_eq!(Assessment::SlightlyChallenging.penalty(), -5);
        assert_eq!(Assessment::Hard.penalty(), -10);
        assert_eq!(Assessment::BelowRange.penalty(), 0);
        assert_eq!(Assessment::WithinRange.penalty(), 0);
        assert_eq!(Assessment::AboveRange.penalty(), -10);
    }

    #[test]
    fn test_grade_bands_are_ordered() {
        assert!(GradeBand::Excellent > GradeBand::Great);
        assert!(GradeBand::Good > GradeBand::Adequate);
        assert!(GradeBand::Adequate > GradeBand::Incomplete);
    }
}
