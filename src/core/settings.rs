use std::{
    path::{Component, Path, PathBuf},
    time::Duration,
};

use super::{extensions::ExtensionSet, sources::SheetRequest};
use crate::{
    config::Config,
    error::{DowserError, Result},
};

/// Where target strings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
    Sheet {
        request: SheetRequest,
        timeout: Duration,
    },
    Manifest {
        path: PathBuf,
    },
}

/// Everything one dowsing run needs, with all paths resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ground_directory: PathBuf,
    pub extensions: ExtensionSet,
    pub ignores: Vec<String>,
    pub source: SourceSettings,
}

impl Settings {
    /// Build settings from a configuration whose relative paths are relative
    /// to `base_dir`.
    ///
    /// A non-blank `strings-sheet-url` selects the spreadsheet; otherwise
    /// `water-file` is used. Fails when neither is usable.
    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        let source = match config.sheet_url() {
            Some(url) => {
                let api_key_file = config.api_key_file.as_deref().ok_or_else(|| {
                    DowserError::Config(
                        "'strings-sheet-url' is set but 'api-key-file' is missing".to_string(),
                    )
                })?;
                SourceSettings::Sheet {
                    request: SheetRequest {
                        url: url.to_string(),
                        worksheet_index: config.strings_sheet_index,
                        column_index: config.strings_column_index,
                        api_key_file: resolve_path(base_dir, api_key_file),
                    },
                    timeout: Duration::from_secs(config.sheet_timeout_secs),
                }
            }
            None => match config.water_file.as_deref() {
                Some(water_file) => SourceSettings::Manifest {
                    path: resolve_path(base_dir, water_file),
                },
                None => {
                    return Err(DowserError::Config(
                        "no string source: set 'strings-sheet-url' or 'water-file'".to_string(),
                    ));
                }
            },
        };

        Ok(Self {
            ground_directory: resolve_path(base_dir, &config.ground_directory),
            extensions: ExtensionSet::parse(&config.water_extensions),
            ignores: config.ignores.clone(),
            source,
        })
    }
}

/// Join a possibly relative path onto `base`, keeping `.`-only bases tidy.
fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = base.components().all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        base.join(rel)
    }
}
