use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to read PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Password-protected PDF")]
    PasswordProtected,

    #[error("PDF text extraction failed: {0}")]
    ExtractionError(String),
}
