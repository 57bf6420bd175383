//! Result set of cleaned customer names.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deduplicated customer names for one document.
///
/// Names are kept in ascending lexicographic order and the empty string is
/// never stored, so iteration and JSON serialization yield the final,
/// sorted result directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerNames {
    names: BTreeSet<String>,
}

impl CustomerNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cleaned name. Returns `false` for empty or already present names.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Consume the set into a sorted list.
    pub fn into_vec(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

impl Extend<String> for CustomerNames {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl FromIterator<String> for CustomerNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

/// Cleaned names found on a single page, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNames {
    /// Page number (1-indexed).
    pub page: u32,
    /// Names in the order their anchors appear; may repeat.
    pub names: Vec<String>,
}
