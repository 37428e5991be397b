//! PDF text extraction module
//!
//! Provides per-page plain-text extraction using MuPDF behind the
//! `TextExtractor` seam.

mod extractor;

pub use extractor::{ExtractError, ExtractedPages, MuPdfExtractor, TextExtractor};
