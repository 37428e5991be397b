//! Per-page text extraction using MuPDF
//!
//! MuPDF work is CPU-bound and blocking; callers are expected to run
//! `TextExtractor::extract_pages` on the blocking thread pool.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use mupdf::Document;
use thiserror::Error;

/// How far into the file the `%PDF` marker may appear
const HEADER_SCAN_BYTES: usize = 1024;

/// PDF extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File is not a PDF document (missing %PDF header)")]
    NotPdf,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("MuPDF error: {0}")]
    MuPdf(String),
}

impl From<mupdf::Error> for ExtractError {
    fn from(e: mupdf::Error) -> Self {
        ExtractError::MuPdf(e.to_string())
    }
}

/// Ordered page texts of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPages {
    pages: Vec<String>,
}

impl ExtractedPages {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<String> {
        self.pages
    }
}

/// Source of per-page plain text for a PDF on disk
pub trait TextExtractor: Send + Sync {
    /// Extract the text of every page, in page order.
    /// Pages without a text layer yield an empty string.
    fn extract_pages(&self, path: &Path) -> Result<ExtractedPages, ExtractError>;
}

/// MuPDF-backed extractor
///
/// Opens a fresh document per call, so a single instance can be shared
/// between requests without any locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuPdfExtractor;

impl MuPdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for MuPdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<ExtractedPages, ExtractError> {
        ensure_pdf_header(path)?;

        let path_str = path.to_string_lossy();
        let doc = Document::open(&*path_str)?;
        let page_count = doc.page_count()?;

        tracing::debug!(path = %path.display(), page_count, "PDF opened");

        let mut pages = Vec::with_capacity(page_count.max(0) as usize);
        for index in 0..page_count {
            let page = doc.load_page(index)?;
            let text = page.to_text()?;

            tracing::debug!(
                page = index + 1,
                total = page_count,
                chars = text.chars().count(),
                "Extracted page text"
            );

            pages.push(text);
        }

        Ok(ExtractedPages::new(pages))
    }
}

/// Reject files that carry no `%PDF` marker near the start
fn ensure_pdf_header(path: &Path) -> Result<(), ExtractError> {
    let mut head = Vec::with_capacity(HEADER_SCAN_BYTES);
    File::open(path)?
        .take(HEADER_SCAN_BYTES as u64)
        .read_to_end(&mut head)?;

    if head.windows(4).any(|w| w == b"%PDF") {
        Ok(())
    } else {
        Err(ExtractError::NotPdf)
    }
}
