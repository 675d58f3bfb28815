//! Extension allow-list ("water extensions").
//!
//! Entries are trimmed and stored without a leading dot, so `".java"` and
//! `"java"` configure the same extension. Comparison is exact and
//! case-sensitive.

use std::{collections::BTreeSet, fmt, path::Path};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Parse a comma-separated list such as `".java, .jsp,js"`.
    ///
    /// Empty entries (including a bare `"."`) are dropped.
    pub fn parse(list: &str) -> Self {
        let extensions = list.split(',').filter_map(normalize).collect();
        Self { extensions }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Whether the file's extension (text after the last `.` of the file name)
    /// is in the set. Files without an extension, including dotfiles such as
    /// `.env`, never match.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}
