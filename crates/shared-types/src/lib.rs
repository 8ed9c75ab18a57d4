pub mod types;

pub use types::{
    Assessment, CourseInfo, GradeBand, Metric, MetricAssessment, ReadabilityReport,
    ReadabilityScores, SectionResult, UNKNOWN,
};
