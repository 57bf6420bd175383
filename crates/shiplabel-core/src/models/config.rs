//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ShiplabelError};

/// Anchor phrase printed above the recipient block on a shipping label.
pub const DEFAULT_ANCHOR_PHRASE: &str = "BILL TO / SHIP TO";

/// Anchors accepted when looking for the first name on a single page.
pub const DEFAULT_PAGE_ANCHOR_PHRASES: [&str; 3] = ["BILL TO", "SHIP TO", "CUSTOMER ADDRESS"];

/// Main configuration for the shiplabel pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiplabelConfig {
    /// Name extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// Name extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Phrase whose line precedes the customer name. Matched
    /// case-insensitively as a substring.
    pub anchor_phrase: String,

    /// Maximum number of words kept from a cleaned name.
    pub max_name_words: usize,

    /// Anchors for the per-page first-name lookup.
    pub page_anchor_phrases: Vec<String>,

    /// Lines after a page anchor searched for a name by the per-page
    /// first-name lookup. Blank lines and lines mentioning an address are
    /// skipped.
    pub lookahead_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            anchor_phrase: DEFAULT_ANCHOR_PHRASE.to_string(),
            max_name_words: 2,
            page_anchor_phrases: DEFAULT_PAGE_ANCHOR_PHRASES.iter().map(|p| p.to_string()).collect(),
            lookahead_lines: 3,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty user password on encrypted documents.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
        }
    }
}

impl ShiplabelConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ShiplabelError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ShiplabelError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ShiplabelConfig::default();
        assert_eq!(config.extraction.anchor_phrase, "BILL TO / SHIP TO");
        assert_eq!(config.extraction.max_name_words, 2);
        assert_eq!(config.extraction.page_anchor_phrases, vec!["BILL TO", "SHIP TO", "CUSTOMER ADDRESS"]);
        assert_eq!(config.extraction.lookahead_lines, 3);
        assert!(config.pdf.decrypt_empty_password);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"max_name_words": 3}}"#).unwrap();

        let config = ShiplabelConfig::from_file(&path).unwrap();
        assert_eq!(config.extraction.max_name_words, 3);
        assert_eq!(config.extraction.anchor_phrase, DEFAULT_ANCHOR_PHRASE);
        assert!(config.pdf.decrypt_empty_password);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ShiplabelConfig::default();
        config.extraction.anchor_phrase = "DELIVER TO".to_string();
        config.save(&path).unwrap();

        assert_eq!(ShiplabelConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ShiplabelConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ShiplabelError::Config(_)));
    }
}
