//! Syllabus analysis engine
//!
//! Checks a course syllabus for required policy sections and rates its
//! readability against the course level. See [`SyllabusAnalyzer`] for the
//! end-to-end pipeline; the individual stages are usable on their own.
//!
//! ```no_run
//! use syllabus_engine::{EngineConfig, SyllabusAnalyzer};
//! use std::path::Path;
//!
//! let analyzer = SyllabusAnalyzer::with_defaults(EngineConfig::default());
//! println!("{}", analyzer.analyze_to_string(Path::new("CMPSC_463_Smith_Fall2025.pdf")));
//! ```

pub mod analyzer;
pub mod cancel;
pub mod config;
pub mod detector;
pub mod error;
pub mod filename;
pub mod readability;
pub mod report;
#[cfg(feature = "fastembed_backend")]
pub mod rerank;
pub mod scoring;
pub mod sections;
pub mod segment;
pub mod spelling;

pub use analyzer::SyllabusAnalyzer;
pub use cancel::CancelToken;
pub use config::EngineConfig;
pub use detector::{search, SearchHit, SectionDetector, DEFAULT_SEARCH_THRESHOLD, DEFAULT_THRESHOLD};
pub use error::AnalysisError;
pub use filename::parse_filename;
pub use readability::{ReadabilityEvaluator, ReadabilityMetrics, TextStatistics};
pub use report::{AnalysisReport, ScoringVariant};
#[cfg(feature = "fastembed_backend")]
pub use rerank::RerankScorer;
pub use scoring::{sigmoid, LexicalScorer, ScoreFn, SimilarityScorer};
pub use sections::{RequiredSection, SectionSpec};
pub use segment::{segment, Segmenter};
pub use spelling::{Dictionary, Misspelling, SpellChecker, SpellingReport, WordList};
