use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{DowserError, Result};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
pub(crate) fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of enumerating the ground directory.
#[derive(Debug, Default)]
pub struct Enumeration {
    /// Every non-directory entry, in depth-first order with siblings sorted by name.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed.
    pub skipped_count: usize,
}

/// Recursively list every file below `root`.
///
/// Directories are descended into, never reported. Symlinks are followed;
/// walkdir reports link cycles as errors, which are logged and skipped.
pub fn enumerate_files(root: &Path, ignore_patterns: &[String]) -> Result<Enumeration> {
    if !root.exists() {
        return Err(DowserError::GroundNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DowserError::GroundNotDirectory(root.to_path_buf()));
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn!("invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut enumeration = Enumeration::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                enumeration.skipped_count += 1;
                warn!("cannot access path: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        enumeration.files.push(entry.into_path());
    }

    Ok(enumeration)
}
