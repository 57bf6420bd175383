//! PDF processing module.

mod extractor;

pub use extractor::{split_lines, PdfDocument, PdfExtractor, PdfPage};

use std::path::Path;

use crate::error::DocumentOpenError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, DocumentOpenError>;

/// Source of per-page document text.
///
/// Opening is the only fallible step: a returned [`PdfDocument`] already
/// holds the text of every page in page order.
pub trait DocumentReader {
    /// Open the document at `path` and read the text of each page.
    fn open(&self, path: &Path) -> Result<PdfDocument>;
}
