//! Customer name cleaning.

use tracing::trace;

use super::anchor::AnchorScanner;
use super::patterns::{ALL_DIGITS, DIGIT_RUN, NAME_DELIMITER};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::config::ExtractionConfig;
use crate::pdf::split_lines;

/// Lines mentioning an address are never taken as a name by the per-page
/// lookup.
const ADDRESS_MARKER: &str = "ADDRESS";

/// Customer name extractor over the text of one page.
pub struct CustomerNameExtractor {
    scanner: AnchorScanner,
    page_scanner: AnchorScanner,
    lookahead: usize,
    max_words: usize,
}

impl CustomerNameExtractor {
    /// Create a new extractor with the default anchor phrase.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            scanner: AnchorScanner::new(&config.anchor_phrase),
            page_scanner: AnchorScanner::with_phrases(&config.page_anchor_phrases),
            lookahead: config.lookahead_lines,
            max_words: config.max_name_words,
        }
    }

    /// Clean every raw candidate on the page, keeping rejected (empty) ones.
    pub fn candidates(&self, lines: &[&str]) -> Vec<ExtractionMatch<String>> {
        self.scanner
            .scan(lines)
            .into_iter()
            .map(|m| m.map(|raw| clean_customer_name_with(&raw, self.max_words)))
            .collect()
    }

    /// First name on the page found through the page anchors.
    ///
    /// Each anchor hit looks at up to `lookahead_lines` following lines,
    /// skipping blank ones and ones that mention an address, and takes the
    /// first that cleans to a name. Anchors without such a line are passed
    /// over.
    pub fn first_name(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        for (i, line) in lines.iter().enumerate() {
            if !self.page_scanner.is_anchor(line) {
                continue;
            }

            for next in lines.iter().skip(i + 1).take(self.lookahead) {
                let raw = next.trim();
                if raw.is_empty() || raw.to_uppercase().contains(ADDRESS_MARKER) {
                    continue;
                }

                let name = clean_customer_name_with(raw, self.max_words);
                if !name.is_empty() {
                    return Some(ExtractionMatch::new(name, i, *line));
                }
            }
        }

        None
    }
}

impl Default for CustomerNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CustomerNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.candidates(&split_lines(text))
            .into_iter()
            .filter(|m| !m.value.is_empty())
            .collect()
    }
}

/// Clean a raw candidate line into a customer name of at most two words.
///
/// Returns an empty string when nothing name-like remains.
pub fn clean_customer_name(text: &str) -> String {
    clean_customer_name_with(text, 2)
}

/// Clean a raw candidate line, keeping at most `max_words` words.
///
/// Everything from the first comma or hyphen on is dropped, then all digits
/// are removed and the remaining words are capped.
pub fn clean_customer_name_with(text: &str, max_words: usize) -> String {
    if text.is_empty() || ALL_DIGITS.is_match(text) {
        trace!("Rejected candidate {:?}", text);
        return String::new();
    }

    let head = NAME_DELIMITER.split(text).next().unwrap_or_default();
    let stripped = DIGIT_RUN.replace_all(head, "");

    let words: Vec<&str> = stripped.split_whitespace().take(max_words).collect();
    if words.is_empty() {
        trace!("Rejected candidate {:?}", text);
    }
    words.join(" ")
}
