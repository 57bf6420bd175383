//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{DocumentReader, Result};
use crate::error::DocumentOpenError;
use crate::models::config::PdfConfig;

/// PDF reader backed by lopdf (parsing, decryption) and pdf-extract (text).
pub struct PdfExtractor {
    config: PdfConfig,
}

/// An opened document: the text of each page, in page order.
#[derive(Debug, Clone, Default)]
pub struct PdfDocument {
    pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page, in reading order.
    pub text: String,
}

impl PdfPage {
    /// Lines of the page text.
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }
}

/// Split page text into lines on `'\n'` only, keeping blank lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

impl PdfDocument {
    /// Build a document from already extracted page texts.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .zip(1u32..)
            .map(|(text, number)| PdfPage {
                number,
                text: text.into(),
            })
            .collect();
        Self { pages }
    }

    pub fn pages(&self) -> &[PdfPage] {
        &self.pages
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Release the document.
    pub fn close(self) {
        debug!("Closing document with {} pages", self.pages.len());
    }
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self {
            config: PdfConfig::default(),
        }
    }

    /// Create a PDF extractor with the given settings.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Parse PDF bytes and read the text of every page.
    pub fn load(&self, data: &[u8]) -> Result<PdfDocument> {
        let mut doc = Document::load_mem(data).map_err(|e| DocumentOpenError::Parse(e.to_string()))?;

        // pdf-extract reparses the raw bytes, so it needs the decrypted form
        let decrypted;
        let raw_data = if doc.is_encrypted() {
            if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(DocumentOpenError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut buf = Vec::new();
            doc.save_to(&mut buf)
                .map_err(|e| DocumentOpenError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted = buf;
            decrypted.as_slice()
        } else {
            data
        };

        let page_count = doc.get_pages().len();
        debug!("Loaded PDF with {} pages", page_count);

        if page_count == 0 {
            return Ok(PdfDocument::default());
        }

        let texts = extract_pages(raw_data)?;
        Ok(PdfDocument::from_pages(texts))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdfExtractor {
    fn open(&self, path: &Path) -> Result<PdfDocument> {
        let data = std::fs::read(path).map_err(|source| DocumentOpenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Read {} bytes from {}", data.len(), path.display());
        self.load(&data)
    }
}

/// Extract one text blob per page. pdf-extract panics on some malformed
/// input, so panics are reported as extraction errors. The panic hook is
/// swapped out meanwhile so the panic message stays off stderr.
fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));
    panic::set_hook(hook);

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(DocumentOpenError::TextExtraction(e.to_string())),
        Err(_) => Err(DocumentOpenError::TextExtraction(
            "text extraction panicked (malformed document)".to_string(),
        )),
    }
}
