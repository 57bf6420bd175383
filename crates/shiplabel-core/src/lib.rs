//! Core library for extracting customer names from shipping-label PDFs.
//!
//! This crate provides:
//! - PDF processing (per-page text extraction)
//! - Anchor-based customer name extraction and cleaning
//! - Configuration and result models

pub mod error;
pub mod label;
pub mod models;
pub mod pdf;

use std::path::Path;

use tracing::error;

pub use error::{DocumentOpenError, Result, ShiplabelError};
pub use label::{clean_customer_name, CustomerNameExtractor, ExtractionResult, FieldExtractor, LabelParser};
pub use models::{CustomerNames, ExtractionConfig, PageNames, PdfConfig, ShiplabelConfig};
pub use pdf::{DocumentReader, PdfDocument, PdfExtractor, PdfPage};

/// Open a PDF and return its unique customer names, sorted.
pub fn try_extract_customer_names(path: &Path) -> std::result::Result<Vec<String>, DocumentOpenError> {
    extract_with_config(&ShiplabelConfig::default(), path).map(|result| result.names.into_vec())
}

/// Open a PDF and return its unique customer names, sorted.
///
/// A document that cannot be opened is logged and yields an empty list.
pub fn extract_customer_names(path: &Path) -> Vec<String> {
    match try_extract_customer_names(path) {
        Ok(names) => names,
        Err(e) => {
            error!("Error opening PDF {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Run the full pipeline with a reader and parser built from `config`.
pub fn extract_with_config(
    config: &ShiplabelConfig,
    path: &Path,
) -> std::result::Result<ExtractionResult, DocumentOpenError> {
    let reader = PdfExtractor::with_config(config.pdf.clone());
    let parser = LabelParser::from_config(&config.extraction);
    extract_with(&reader, &parser, path)
}

/// Run the full pipeline with the given reader and parser.
pub fn extract_with<R: DocumentReader>(
    reader: &R,
    parser: &LabelParser,
    path: &Path,
) -> std::result::Result<ExtractionResult, DocumentOpenError> {
    let doc = reader.open(path)?;
    let result = parser.parse(&doc);
    doc.close();
    Ok(result)
}
