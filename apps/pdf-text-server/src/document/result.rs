//! Extraction response assembly

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::direction::{DirectionSummary, Language, TextDirection};

/// Separator appended after every page in `complete_text`
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Structured result of a text extraction
///
/// `text_by_page` is keyed by 0-based page index; JSON object keys are the
/// decimal indices and the map keeps them in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub status: String,
    pub filename: String,
    pub page_count: usize,
    pub text_by_page: BTreeMap<usize, String>,
    pub complete_text: String,
    pub text_direction: TextDirection,
    pub language: Option<Language>,
}

impl ExtractionResult {
    /// Build the result from ordered page texts
    pub fn assemble(filename: impl Into<String>, pages: Vec<String>) -> Self {
        let summary = DirectionSummary::from_pages(&pages);
        if summary.is_rtl() {
            tracing::info!(pages = ?summary.arabic_pages, "Arabic text detected");
        }

        let complete_text = pages.iter().fold(String::new(), |mut acc, text| {
            acc.push_str(text);
            acc.push_str(PAGE_SEPARATOR);
            acc
        });

        let text_by_page: BTreeMap<usize, String> = pages.into_iter().enumerate().collect();

        Self {
            status: "success".to_string(),
            filename: filename.into(),
            page_count: text_by_page.len(),
            text_by_page,
            complete_text,
            text_direction: summary.direction,
            language: summary.language,
        }
    }
}
