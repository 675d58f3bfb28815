use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{ExtensionSet, file_scanner::is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = ".dowserrc.json";

/// Highest 0-based column index expressible in A1 notation (`ZZZ`).
pub const MAX_COLUMN_INDEX: usize = 18_277;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Comma-separated extensions eligible for scanning, e.g. `".java, .js"`.
    #[serde(default = "default_water_extensions")]
    pub water_extensions: String,
    #[serde(default = "default_ground_directory")]
    pub ground_directory: String,
    /// When set (and non-blank), target strings come from this spreadsheet.
    #[serde(default)]
    pub strings_sheet_url: Option<String>,
    #[serde(default)]
    pub api_key_file: Option<String>,
    #[serde(default)]
    pub strings_sheet_index: usize,
    /// 0-based column holding the target strings.
    #[serde(default)]
    pub strings_column_index: usize,
    /// Local manifest, one target string per line. Used when no sheet URL is set.
    #[serde(default)]
    pub water_file: Option<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_sheet_timeout_secs")]
    pub sheet_timeout_secs: u64,
}

fn default_water_extensions() -> String {
    ".java, .jsp, .js".to_string()
}

fn default_ground_directory() -> String {
    ".".to_string()
}

fn default_sheet_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            water_extensions: default_water_extensions(),
            ground_directory: default_ground_directory(),
            strings_sheet_url: None,
            api_key_file: None,
            strings_sheet_index: 0,
            strings_column_index: 0,
            water_file: None,
            ignores: Vec::new(),
            sheet_timeout_secs: default_sheet_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores`, an extension list with no
    /// usable entries, a column past `ZZZ` and a zero spreadsheet timeout.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if ExtensionSet::parse(&self.water_extensions).is_empty() {
            bail!(
                "'water-extensions' must name at least one extension (got \"{}\")",
                self.water_extensions
            );
        }

        if self.strings_column_index > MAX_COLUMN_INDEX {
            bail!(
                "'strings-column-index' must be at most {} (got {})",
                MAX_COLUMN_INDEX,
                self.strings_column_index
            );
        }

        if self.sheet_timeout_secs == 0 {
            bail!("'sheet-timeout-secs' must be greater than zero");
        }

        Ok(())
    }

    /// The sheet URL if one is configured and not blank.
    pub fn sheet_url(&self) -> Option<&str> {
        self.strings_sheet_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Values given on the command line, applied over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub water_extensions: Option<String>,
    pub ground_directory: Option<PathBuf>,
    pub strings_sheet_url: Option<String>,
    pub api_key_file: Option<PathBuf>,
    pub strings_sheet_index: Option<usize>,
    pub strings_column_index: Option<usize>,
    pub water_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Override paths are made absolute against the current directory, so
    /// they are not re-rooted at the config file's directory.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(ref extensions) = self.water_extensions {
            config.water_extensions = extensions.clone();
        }
        if let Some(ref dir) = self.ground_directory {
            config.ground_directory = absolute_string(dir)?;
        }
        if let Some(ref url) = self.strings_sheet_url {
            config.strings_sheet_url = Some(url.clone());
        }
        if let Some(ref key_file) = self.api_key_file {
            config.api_key_file = Some(absolute_string(key_file)?);
        }
        if let Some(index) = self.strings_sheet_index {
            config.strings_sheet_index = index;
        }
        if let Some(index) = self.strings_column_index {
            config.strings_column_index = index;
        }
        if let Some(ref water_file) = self.water_file {
            config.water_file = Some(absolute_string(water_file)?);
        }
        Ok(())
    }
}

fn absolute_string(path: &Path) -> Result<String> {
    let absolute =
        std::path::absolute(path).with_context(|| format!("Invalid path: {:?}", path))?;
    Ok(absolute.to_string_lossy().into_owned())
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        water_file: Some("water.txt".to_string()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self, start_dir: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(start_dir)
            .to_path_buf()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
