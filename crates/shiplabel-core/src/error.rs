//! Error types for the shiplabel-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the shiplabel library.
#[derive(Error, Debug)]
pub enum ShiplabelError {
    /// The document could not be opened.
    #[error("failed to open document: {0}")]
    Open(#[from] DocumentOpenError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while opening a PDF and reading its text layer.
///
/// This is the only failure the extraction pipeline can observe; everything
/// downstream of a successfully opened document is total.
#[derive(Error, Debug)]
pub enum DocumentOpenError {
    /// The file could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes do not parse as a PDF.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The text layer could not be produced.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),
}

/// Result type for the shiplabel library.
pub type Result<T> = std::result::Result<T, ShiplabelError>;
