//! Shared PDF handling utilities
//!
//! This crate turns a syllabus PDF on disk into ordered page text for the
//! analysis engine. Pages without extractable text are kept as placeholder
//! markers so page order is never lost.

pub mod error;
pub mod extract;

pub use error::PdfError;
pub use extract::{
    is_no_text_placeholder, no_text_placeholder, split_pages, PdfPageExtractor, PdfTextExtractor,
};
