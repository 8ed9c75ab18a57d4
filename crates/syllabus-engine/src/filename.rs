//! Course metadata from conventionally named syllabus files
//!
//! Syllabus files are named `<DEPT>_<NUMBER>_<Instructor>_<Semester>.pdf`
//! or `<DEPT>.<NUMBER>_<Instructor>_<Semester>.pdf`. The course number's
//! leading digit selects the readability band, so a file whose level cannot
//! be derived is rejected instead of defaulted.

use crate::error::AnalysisError;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{CourseInfo, UNKNOWN};
use std::path::Path;

/// Token delimiter inside the file stem
pub const FILENAME_DELIMITER: char = '_';

/// Highest supported course level (400-level courses)
pub const MAX_COURSE_LEVEL: u8 = 4;

lazy_static! {
    static ref LEADING_DIGITS: Regex = Regex::new(r"^(\d+)").unwrap();
    static ref DOTTED_COURSE: Regex = Regex::new(r"^[A-Za-z]+\.(\d+)").unwrap();
}

/// Raw header fields split out of a file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts {
    pub course: String,
    pub instructor: String,
    pub semester: String,
    /// Digits that carry the course number, when the layout provides them
    pub course_digits: Option<String>,
    pub recognized: bool,
}

impl FilenameParts {
    fn unrecognized() -> Self {
        Self {
            course: UNKNOWN.to_string(),
            instructor: UNKNOWN.to_string(),
            semester: UNKNOWN.to_string(),
            course_digits: None,
            recognized: false,
        }
    }
}

/// File name with its `.pdf` extension removed
pub fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let split_at = name.len().saturating_sub(4);
    match name.get(split_at..) {
        Some(ext) if ext.eq_ignore_ascii_case(".pdf") => name[..split_at].to_string(),
        _ => name,
    }
}

/// Split a file stem into course, instructor and semester
pub fn split_filename(stem: &str) -> FilenameParts {
    let tokens: Vec<&str> = stem.split(FILENAME_DELIMITER).collect();

    let numeric_second = tokens
        .get(1)
        .and_then(|t| t.chars().next())
        .is_some_and(|c| c.is_ascii_digit());

    if tokens.len() >= 4 && numeric_second {
        FilenameParts {
            course: format!("{}.{}", tokens[0], tokens[1]),
            instructor: tokens[2].to_string(),
            semester: tokens[3].to_string(),
            course_digits: LEADING_DIGITS
                .captures(tokens[1])
                .map(|c| c[1].to_string()),
            recognized: true,
        }
    } else if tokens.len() >= 3 {
        FilenameParts {
            course: tokens[0].to_string(),
            instructor: tokens[1].to_string(),
            semester: tokens[2].to_string(),
            course_digits: DOTTED_COURSE
                .captures(tokens[0])
                .map(|c| c[1].to_string()),
            recognized: true,
        }
    } else {
        FilenameParts::unrecognized()
    }
}

/// Course level from a course-number digit run
///
/// Numbers shorter than three digits are left-padded with zeros, so `"63"`
/// is read as `"063"` and yields level 0.
pub fn course_level(course_digits: &str) -> Result<u8, AnalysisError> {
    if course_digits.is_empty() || !course_digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AnalysisError::FilenamePattern(format!(
            "course number '{}' is not a digit run",
            course_digits
        )));
    }

    let padded = format!("{:0>3}", course_digits);
    let level = padded
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
        .ok_or_else(|| AnalysisError::FilenamePattern(course_digits.to_string()))?;

    if level > MAX_COURSE_LEVEL {
        return Err(AnalysisError::UnsupportedCourseLevel(level));
    }

    Ok(level)
}

/// Parse a file stem into full course metadata
///
/// # Errors
/// - `FilenamePattern` if the stem has fewer than three tokens or no course
///   number can be located
/// - `UnsupportedCourseLevel` if the course number starts with 5-9
pub fn parse_filename(stem: &str) -> Result<CourseInfo, AnalysisError> {
    let parts = split_filename(stem);

    if !parts.recognized {
        return Err(AnalysisError::FilenamePattern(format!(
            "'{}' (expected DEPT_NUMBER_Instructor_Semester or DEPT.NUMBER_Instructor_Semester)",
            stem
        )));
    }

    let digits = parts.course_digits.as_deref().ok_or_else(|| {
        AnalysisError::FilenamePattern(format!(
            "no course number found in '{}'",
            parts.course
        ))
    })?;

    let level = course_level(digits)?;

    Ok(CourseInfo {
        course: parts.course,
        instructor: parts.instructor,
        semester: parts.semester,
        course_level: level,
    })
}
