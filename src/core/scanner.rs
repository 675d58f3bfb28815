//! Occurrence scanning: which target strings appear in at least one file.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{
    extensions::ExtensionSet,
    text::{FileText, read_text},
};
use crate::error::{DowserError, Result};

/// A file that was skipped because it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Target strings confirmed present in at least one scanned file.
///
/// Borrows from the target list, so it can only ever hold strings from it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OccurrenceSet<'a> {
    found: HashSet<&'a str>,
}

impl<'a> OccurrenceSet<'a> {
    pub fn contains(&self, target: &str) -> bool {
        self.found.contains(target)
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    fn insert(&mut self, target: &'a str) {
        self.found.insert(target);
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome<'a> {
    pub found: OccurrenceSet<'a>,
    /// Files whose contents were read and searched.
    pub scanned_files: usize,
    /// Files not opened because their extension is not allowed.
    pub skipped_by_extension: usize,
    pub decode_warnings: Vec<DecodeWarning>,
}

/// Search every allowed file for every target string.
///
/// A file that is not valid UTF-8 is skipped and recorded as a
/// [`DecodeWarning`]; any other read failure aborts the scan.
pub fn scan<'a>(
    files: &[PathBuf],
    targets: &'a [String],
    extensions: &ExtensionSet,
) -> Result<ScanOutcome<'a>> {
    let mut outcome = ScanOutcome::default();

    // Unique targets still waiting to be found, in input order.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pending: Vec<&'a str> = targets
        .iter()
        .map(String::as_str)
        .filter(|t| seen.insert(*t))
        .collect();

    for file in files {
        if !extensions.matches(file) {
            outcome.skipped_by_extension += 1;
            continue;
        }

        let content = match read_file(file)? {
            FileText::Text(content) => content,
            FileText::Undecodable(e) => {
                debug!("skipping {}: not valid UTF-8 ({})", file.display(), e);
                outcome.decode_warnings.push(DecodeWarning {
                    path: file.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        outcome.scanned_files += 1;

        pending.retain(|target| {
            if content.contains(*target) {
                outcome.found.insert(*target);
                false
            } else {
                true
            }
        });
    }

    Ok(outcome)
}

fn read_file(path: &Path) -> Result<FileText> {
    read_text(path).map_err(|source| DowserError::Io {
        path: path.to_path_buf(),
        source,
    })
}
