//! Anchor phrase scanning over page lines.

use tracing::trace;

use super::ExtractionMatch;
use crate::models::config::DEFAULT_ANCHOR_PHRASE;

/// Finds lines containing an anchor phrase and yields the line after each.
#[derive(Debug, Clone)]
pub struct AnchorScanner {
    /// Upper-cased anchor phrases.
    anchors: Vec<String>,
}

impl AnchorScanner {
    /// Create a scanner for the given phrase. Matching is case-insensitive.
    pub fn new(phrase: &str) -> Self {
        Self::with_phrases([phrase])
    }

    /// Create a scanner matching any of the given phrases.
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            anchors: phrases.into_iter().map(|p| p.as_ref().to_uppercase()).collect(),
        }
    }

    /// Whether `line` contains an anchor phrase in any letter case.
    pub fn is_anchor(&self, line: &str) -> bool {
        let upper = line.to_uppercase();
        self.anchors.iter().any(|anchor| upper.contains(anchor.as_str()))
    }

    /// Raw candidates for every anchor hit, in line order.
    ///
    /// The value is the trimmed line following the anchor line, and `source`
    /// holds the anchor line itself. An anchor on the last line yields
    /// nothing.
    pub fn scan(&self, lines: &[&str]) -> Vec<ExtractionMatch<String>> {
        let mut results = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if !self.is_anchor(line) {
                continue;
            }

            match lines.get(i + 1) {
                Some(next) => {
                    trace!("Anchor at line {}, candidate {:?}", i, next);
                    results.push(ExtractionMatch::new(next.trim().to_string(), i, *line));
                }
                None => trace!("Anchor at line {} has no following line", i),
            }
        }

        results
    }
}

impl Default for AnchorScanner {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR_PHRASE)
    }
}
