use shared_pdf::PdfError;
use thiserror::Error;

/// Errors that stop a syllabus analysis
///
/// The first four variants are input problems detected before any text is
/// extracted or scored. An empty document is not an error: it produces a
/// report with every section missing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Error: The file does not exist: {0}")]
    InputNotFound(String),

    #[error("Error: Only PDF files are accepted: {0}")]
    UnsupportedFormat(String),

    #[error("Error: Unexpected filename format: {0}")]
    FilenamePattern(String),

    #[error("Error: Unsupported course level {0} (expected 0-4)")]
    UnsupportedCourseLevel(u8),

    #[error("Error: PDF extraction failed: {0}")]
    Extraction(String),

    #[error("Error: Similarity scoring failed: {0}")]
    Scorer(String),

    #[error("Error: Could not load dictionary: {0}")]
    Dictionary(String),

    #[error("Error: Analysis cancelled")]
    Cancelled,
}

impl From<PdfError> for AnalysisError {
    fn from(err: PdfError) -> Self {
        AnalysisError::Extraction(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_explanatory() {
        assert_eq!(
            AnalysisError::UnsupportedCourseLevel(7).to_string(),
            "Error: Unsupported course level 7 (expected 0-4)"
        );
        assert!(AnalysisError::InputNotFound("missing.pdf".into())
            .to_string()
            .contains("does not exist"));
    }

    #[test]
    fn test_pdf_errors_become_extraction_errors() {
        let err: AnalysisError = PdfError::PasswordProtected.into();
        assert_eq!(
            err,
            AnalysisError::Extraction("Password-protected PDF".to_string())
        );
    }
}
