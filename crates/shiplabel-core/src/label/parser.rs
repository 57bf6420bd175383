//! Document-level name extraction.

use std::time::Instant;

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::names::{CustomerNames, PageNames};
use crate::pdf::{PdfDocument, PdfPage};

use super::rules::{CustomerNameExtractor, FieldExtractor};

/// Result of name extraction over one document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Unique cleaned names, sorted.
    pub names: CustomerNames,
    /// Pages scanned.
    pub pages: u32,
    /// Anchor hits that had a following line.
    pub candidates: usize,
    /// Candidates that cleaned to an empty string.
    pub rejected: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Runs the anchor scan and name cleaning over every page of a document.
pub struct LabelParser {
    extractor: CustomerNameExtractor,
}

impl LabelParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            extractor: CustomerNameExtractor::new(),
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            extractor: CustomerNameExtractor::from_config(config),
        }
    }

    /// Collect the unique customer names of a document.
    pub fn parse(&self, doc: &PdfDocument) -> ExtractionResult {
        let start = Instant::now();
        let mut names = CustomerNames::new();
        let mut candidates = 0;
        let mut rejected = 0;

        for page in doc.pages() {
            for m in self.extractor.candidates(&page.lines()) {
                candidates += 1;
                if m.value.is_empty() {
                    rejected += 1;
                } else {
                    names.insert(m.value);
                }
            }
            debug!("Page {}: {} names so far", page.number, names.len());
        }

        debug!(
            "Extracted {} unique names from {} candidates ({} rejected)",
            names.len(),
            candidates,
            rejected
        );

        ExtractionResult {
            names,
            pages: doc.page_count(),
            candidates,
            rejected,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Cleaned names of each page, in page and line order.
    pub fn names_by_page(&self, doc: &PdfDocument) -> Vec<PageNames> {
        doc.pages()
            .iter()
            .map(|page| PageNames {
                page: page.number,
                names: self
                    .extractor
                    .extract_all(&page.text)
                    .into_iter()
                    .map(|m| m.value)
                    .collect(),
            })
            .collect()
    }

    /// First customer name on a page, using the looser page anchors and
    /// lookahead.
    pub fn first_name(&self, page: &PdfPage) -> Option<String> {
        self.extractor.first_name(&page.lines()).map(|m| m.value)
    }
}

impl Default for LabelParser {
    fn default() -> Self {
        Self::new()
    }
}
