//! Extracted document model
//!
//! Format-independent view of an extraction: text direction detection
//! and the response assembled from per-page text.

pub mod direction;
pub mod result;

pub use direction::{contains_arabic, is_arabic, DirectionSummary, Language, TextDirection};
pub use result::{ExtractionResult, PAGE_SEPARATOR};
