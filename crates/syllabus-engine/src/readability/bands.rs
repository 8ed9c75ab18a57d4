//! Course-level readability bands
//!
//! Introductory courses are expected to read more easily than 400-level
//! courses, so each level carries its own thresholds for the three metrics.

use crate::error::AnalysisError;
use shared_types::Assessment;

/// Reading ease thresholds, `easy > preferred > warn`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingEaseBand {
    pub easy: f64,
    pub preferred: f64,
    pub warn: f64,
}

impl ReadingEaseBand {
    pub fn classify(&self, value: f64) -> Assessment {
        if value >= self.easy {
            Assessment::VeryEasy
        } else if value >= self.preferred {
            Assessment::Comfortable
        } else if value > self.warn {
            Assessment::SlightlyChallenging
        } else {
            Assessment::Hard
        }
    }
}

/// Inclusive target range for a grade-level style metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBand {
    pub min: f64,
    pub max: f64,
}

impl RangeBand {
    pub fn classify(&self, value: f64) -> Assessment {
        if value < self.min {
            Assessment::BelowRange
        } else if value <= self.max {
            Assessment::WithinRange
        } else {
            Assessment::AboveRange
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityBand {
    pub course_level: u8,
    pub reading_ease: ReadingEaseBand,
    pub grade_level: RangeBand,
    pub density_index: RangeBand,
}

const fn band(
    course_level: u8,
    ease: (f64, f64, f64),
    grade: (f64, f64),
    fog: (f64, f64),
) -> ReadabilityBand {
    ReadabilityBand {
        course_level,
        reading_ease: ReadingEaseBand {
            easy: ease.0,
            preferred: ease.1,
            warn: ease.2,
        },
        grade_level: RangeBand {
            min: grade.0,
            max: grade.1,
        },
        density_index: RangeBand {
            min: fog.0,
            max: fog.1,
        },
    }
}

/// Bands indexed by course level 0-4
pub const BANDS: [ReadabilityBand; 5] = [
    band(0, (80.0, 65.0, 50.0), (6.0, 10.0), (8.0, 12.0)),
    band(1, (70.0, 60.0, 45.0), (8.0, 12.0), (10.0, 14.0)),
    band(2, (65.0, 50.0, 40.0), (10.0, 14.0), (12.0, 16.0)),
    band(3, (60.0, 45.0, 30.0), (12.0, 16.0), (13.0, 17.0)),
    band(4, (50.0, 35.0, 20.0), (13.0, 18.0), (14.0, 19.0)),
];

pub fn band_for_level(course_level: u8) -> Result<&'static ReadabilityBand, AnalysisError> {
    BANDS
        .get(course_level as usize)
        .ok_or(AnalysisError::UnsupportedCourseLevel(course_level))
}
