//! Text direction detection
//!
//! A document is right-to-left as soon as any page carries a character
//! from one of the Arabic Unicode blocks. There is no mixed-direction
//! handling: one Arabic character anywhere flips the whole document.

use serde::{Deserialize, Serialize};

/// Arabic, Arabic Supplement, Arabic Extended-A and the two
/// Arabic Presentation Forms blocks (inclusive bounds).
const ARABIC_RANGES: &[(char, char)] = &[
    ('\u{0600}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'),
    ('\u{08A0}', '\u{08FF}'),
    ('\u{FB50}', '\u{FDFF}'),
    ('\u{FE70}', '\u{FEFF}'),
];

/// Document-level text direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Language tag attached to right-to-left documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
        }
    }
}

/// Check whether a character falls within the Arabic ranges
pub fn is_arabic(c: char) -> bool {
    ARABIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Check whether any character of `text` is Arabic
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic)
}

/// Direction verdict aggregated over all pages of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionSummary {
    pub direction: TextDirection,
    pub language: Option<Language>,
    /// 0-based indices of the pages that contain Arabic
    pub arabic_pages: Vec<usize>,
}

impl DirectionSummary {
    /// Classify each page and aggregate into a document verdict
    pub fn from_pages<S: AsRef<str>>(pages: &[S]) -> Self {
        let arabic_pages: Vec<usize> = pages
            .iter()
            .enumerate()
            .filter(|(_, text)| contains_arabic(text.as_ref()))
            .map(|(index, _)| index)
            .collect();

        if arabic_pages.is_empty() {
            Self::default()
        } else {
            Self {
                direction: TextDirection::Rtl,
                language: Some(Language::Arabic),
                arabic_pages,
            }
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl
    }
}
