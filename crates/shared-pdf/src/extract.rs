//! PDF page text extraction
//!
//! Pages are read with lopdf one at a time so a page without a text layer
//! can be replaced by a placeholder marker. When lopdf cannot open the file
//! the whole document is handed to pdf-extract and split on form feeds.
//!
//! # Example
//! ```no_run
//! use shared_pdf::{PdfPageExtractor, PdfTextExtractor};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), shared_pdf::PdfError> {
//! let pages = PdfPageExtractor::new().extract(Path::new("CMPSC_463_Smith_Fall2025.pdf"))?;
//! println!("Extracted {} pages", pages.len());
//! # Ok(())
//! # }
//! ```

use crate::PdfError;
use std::path::Path;

/// Source of per-page document text
///
/// Implementations must be shareable across threads; the analysis engine
/// holds one behind an `Arc` and may serve concurrent requests with it.
pub trait PdfTextExtractor: Send + Sync {
    /// Extract the text of every page, in page order
    ///
    /// A page with no extractable text yields [`no_text_placeholder`],
    /// never an omitted entry.
    fn extract(&self, path: &Path) -> Result<Vec<String>, PdfError>;
}

const NO_TEXT_FOUND: &str = "[No Text Found]";

/// Marker emitted for a page without a text layer (1-indexed page number)
pub fn no_text_placeholder(page_number: usize) -> String {
    format!("\n--- Page {} ---\n{}\n", page_number, NO_TEXT_FOUND)
}

/// Whether page text is nothing but the no-text marker
pub fn is_no_text_placeholder(page: &str) -> bool {
    let mut lines = page.trim().lines().map(str::trim);
    let marker = match (lines.next(), lines.next(), lines.next()) {
        (Some(marker), Some(NO_TEXT_FOUND), None) => marker,
        _ => return false,
    };

    marker
        .strip_prefix("--- Page ")
        .and_then(|rest| rest.strip_suffix(" ---"))
        .is_some_and(|number| !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()))
}

/// Split whole-document text on form feed characters into pages
///
/// Blank pages are replaced with placeholders. Text without form feeds is
/// treated as a single page.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text
        .split('\x0C')
        .enumerate()
        .map(|(idx, page)| {
            if page.trim().is_empty() {
                no_text_placeholder(idx + 1)
            } else {
                page.to_string()
            }
        })
        .collect();

    // A trailing form feed closes the last page rather than opening a new one
    if text.ends_with('\x0C') && pages.len() > 1 {
        pages.pop();
    }

    pages
}

/// Default extractor backed by lopdf with a pdf-extract fallback
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPageExtractor;

impl PdfPageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract pages from in-memory PDF bytes
    pub fn extract_from_mem(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, PdfError> {
        match lopdf::Document::load_mem(pdf_bytes) {
            Ok(document) => Self::extract_with_lopdf(&document),
            Err(e) => {
                tracing::debug!("lopdf could not load document ({}), falling back to pdf-extract", e);
                Self::extract_with_pdf_extract(pdf_bytes)
            }
        }
    }

    fn extract_with_lopdf(document: &lopdf::Document) -> Result<Vec<String>, PdfError> {
        if document.is_encrypted() {
            return Err(PdfError::PasswordProtected);
        }

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(PdfError::InvalidPdf("document has no pages".to_string()));
        }

        let pages = page_numbers
            .iter()
            .enumerate()
            .map(|(idx, page_number)| match document.extract_text(&[*page_number]) {
                Ok(text) if !text.trim().is_empty() => text,
                Ok(_) => no_text_placeholder(idx + 1),
                Err(e) => {
                    tracing::debug!("No text on page {}: {}", page_number, e);
                    no_text_placeholder(idx + 1)
                }
            })
            .collect();

        Ok(pages)
    }

    fn extract_with_pdf_extract(pdf_bytes: &[u8]) -> Result<Vec<String>, PdfError> {
        let raw_text = pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| {
            let error_msg = e.to_string().to_lowercase();

            if error_msg.contains("encrypted") || error_msg.contains("password") {
                PdfError::PasswordProtected
            } else if error_msg.contains("invalid")
                || error_msg.contains("malformed")
                || error_msg.contains("corrupt")
            {
                PdfError::InvalidPdf(e.to_string())
            } else {
                PdfError::ExtractionError(e.to_string())
            }
        })?;

        Ok(split_pages(&raw_text))
    }
}

impl PdfTextExtractor for PdfPageExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, PdfError> {
        let pdf_bytes = std::fs::read(path)?;
        let pages = self.extract_from_mem(&pdf_bytes)?;
        tracing::debug!("Extracted {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }
}
