//! Data models for shipping-label extraction.

pub mod config;
pub mod names;

pub use config::{ExtractionConfig, PdfConfig, ShiplabelConfig};
pub use names::{CustomerNames, PageNames};
