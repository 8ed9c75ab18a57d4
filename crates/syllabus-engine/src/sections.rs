//! Required syllabus sections
//!
//! Each section is a fixed enum variant paired with an immutable record of
//! keyword queries, a recommendation shown when it is missing, and kudos
//! shown when it is present.

use serde::{Deserialize, Serialize};

/// Points awarded for each section found
pub const POINTS_PER_SECTION: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredSection {
    InstructorContact,
    OfficeHours,
    CourseDescription,
    LearningObjectives,
    CourseMaterials,
    GradingPolicy,
    ExamPolicy,
    AttendancePolicy,
    LateWorkPolicy,
    CourseSchedule,
    AcademicIntegrity,
    DisabilityAccommodations,
    CounselingServices,
    EducationalEquity,
}

/// Static configuration for one required section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    /// Keyword queries, most specific first
    pub keywords: &'static [&'static str],
    pub recommendation: &'static str,
    pub kudos: &'static str,
}

impl RequiredSection {
    /// Every required section, in report order
    pub const ALL: [RequiredSection; 14] = [
        RequiredSection::InstructorContact,
        RequiredSection::OfficeHours,
        RequiredSection::CourseDescription,
        RequiredSection::LearningObjectives,
        RequiredSection::CourseMaterials,
        RequiredSection::GradingPolicy,
        RequiredSection::ExamPolicy,
        RequiredSection::AttendancePolicy,
        RequiredSection::LateWorkPolicy,
        RequiredSection::CourseSchedule,
        RequiredSection::AcademicIntegrity,
        RequiredSection::DisabilityAccommodations,
        RequiredSection::CounselingServices,
        RequiredSection::EducationalEquity,
    ];

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn spec(&self) -> SectionSpec {
        match self {
            RequiredSection::InstructorContact => SectionSpec {
                name: "Instructor Contact Information",
                keywords: &["instructor email", "contact information", "email", "phone"],
                recommendation: "List the instructor's name, email address, and preferred way to be contacted.",
                kudos: "Students know exactly how to reach the instructor.",
            },
            RequiredSection::OfficeHours => SectionSpec {
                name: "Office Hours",
                keywords: &["office hours", "office location", "by appointment"],
                recommendation: "State when and where office hours are held, including virtual options.",
                kudos: "Office hours are clearly posted.",
            },
            RequiredSection::CourseDescription => SectionSpec {
                name: "Course Description",
                keywords: &["course description", "this course introduces", "prerequisites"],
                recommendation: "Add the catalog description and any prerequisites for the course.",
                kudos: "The course description sets clear expectations.",
            },
            RequiredSection::LearningObjectives => SectionSpec {
                name: "Learning Objectives",
                keywords: &["learning objectives", "learning outcomes", "students will be able to", "objective", "outcome"],
                recommendation: "Describe what students will be able to do by the end of the course.",
                kudos: "Learning outcomes are stated explicitly.",
            },
            RequiredSection::CourseMaterials => SectionSpec {
                name: "Course Materials",
                keywords: &["required textbook", "course materials", "required materials", "textbook"],
                recommendation: "List required textbooks, software, and other materials with how to obtain them.",
                kudos: "Required materials are listed.",
            },
            RequiredSection::GradingPolicy => SectionSpec {
                name: "Grading Policy",
                keywords: &["grading policy", "grade breakdown", "final grade", "grading"],
                recommendation: "Explain how final grades are computed, including weights and letter-grade cutoffs.",
                kudos: "The grading policy is transparent.",
            },
            RequiredSection::ExamPolicy => SectionSpec {
                name: "Exam Policy",
                keywords: &["exam policy", "midterm exam", "final exam", "exams"],
                recommendation: "Give exam dates, format, and the policy for missed or make-up exams.",
                kudos: "Exam expectations are spelled out.",
            },
            RequiredSection::AttendancePolicy => SectionSpec {
                name: "Attendance Policy",
                keywords: &["attendance policy", "attendance", "absences"],
                recommendation: "State the attendance expectations and how absences are handled.",
                kudos: "Attendance expectations are clear.",
            },
            RequiredSection::LateWorkPolicy => SectionSpec {
                name: "Late Work Policy",
                keywords: &["late work policy", "late submissions", "late assignments", "extensions"],
                recommendation: "Describe penalties for late work and how to request an extension.",
                kudos: "The late work policy is fair and explicit.",
            },
            RequiredSection::CourseSchedule => SectionSpec {
                name: "Course Schedule",
                keywords: &["course schedule", "weekly schedule", "tentative schedule", "calendar"],
                recommendation: "Include a week-by-week schedule of topics, readings, and due dates.",
                kudos: "A course schedule helps students plan ahead.",
            },
            RequiredSection::AcademicIntegrity => SectionSpec {
                name: "Academic Integrity Statement",
                keywords: &["academic integrity", "plagiarism", "academic dishonesty", "cheating"],
                recommendation: "Add the institutional academic integrity statement and the consequences of violations.",
                kudos: "Academic integrity expectations are stated.",
            },
            RequiredSection::DisabilityAccommodations => SectionSpec {
                name: "Disability Accommodations",
                keywords: &["disability accommodations", "disability services", "accommodations", "accessibility"],
                recommendation: "Include the statement on disability accommodations and how to request them.",
                kudos: "Students needing accommodations know where to turn.",
            },
            RequiredSection::CounselingServices => SectionSpec {
                name: "Counseling and Psychological Services",
                keywords: &["counseling and psychological services", "counseling", "mental health", "crisis line"],
                recommendation: "Point students to counseling and psychological services, including crisis contacts.",
                kudos: "Mental health resources are included.",
            },
            RequiredSection::EducationalEquity => SectionSpec {
                name: "Educational Equity Statement",
                keywords: &["educational equity", "report bias", "equity", "discrimination"],
                recommendation: "Add the educational equity statement and how to report bias incidents.",
                kudos: "The educational equity statement is present.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_names_are_unique() {
        let names: HashSet<_> = RequiredSection::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), RequiredSection::ALL.len());
    }

    #[test]
    fn test_every_section_has_keywords_and_text() {
        for section in RequiredSection::ALL {
            let spec = section.spec();
            assert!(!spec.keywords.is_empty(), "{} has no keywords", spec.name);
            assert!(!spec.recommendation.is_empty());
            assert!(!spec.kudos.is_empty());
        }
    }

    #[test]
    fn test_full_marks_reach_top_band() {
        let max = RequiredSection::ALL.len() as i32 * POINTS_PER_SECTION;
        assert_eq!(max, 140);
        assert!(max >= shared_types::types::EXCELLENT_FLOOR);
    }
}
