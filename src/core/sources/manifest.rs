use std::path::{Path, PathBuf};

use tracing::warn;

use super::ResolveStrings;
use crate::{
    core::text::{FileText, read_text},
    error::{DowserError, Result},
};

/// Local "water file": one target string per line.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResolveStrings for ManifestSource {
    /// An undecodable manifest yields no targets and a warning; any other read
    /// failure is fatal.
    fn resolve(&mut self) -> Result<Vec<String>> {
        match read_text(&self.path) {
            Ok(FileText::Text(text)) => Ok(split_lines(&text)),
            Ok(FileText::Undecodable(e)) => {
                warn!(
                    "error in reading file {} - not valid UTF-8 ({}); no target strings loaded",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
            Err(source) => Err(DowserError::ManifestUnreadable {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Split on `\n` (and `\r\n`). Interior blank lines are kept; a trailing
/// newline does not add an empty entry.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}
