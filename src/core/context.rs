use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::settings::Settings;
use crate::config::{Config, ConfigOverrides, load_config};

/// Configuration and resolved settings for one run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g. `--ground-directory src`)
/// 2. `.dowserrc.json` found from the project root upward
/// 3. Built-in defaults
pub struct DivineContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub settings: Settings,
}

impl DivineContext {
    pub fn new(project_root: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let loaded = load_config(project_root)?;
        match loaded.path {
            Some(ref path) => debug!("using config file {}", path.display()),
            None => debug!("no .dowserrc.json found, using default configuration"),
        }

        let base_dir = loaded.base_dir(project_root);
        let config_path = loaded.path;
        let mut config = loaded.config;

        overrides.apply(&mut config)?;
        config.validate()?;

        let settings = Settings::from_config(&config, &base_dir)?;

        Ok(Self {
            config,
            config_path,
            settings,
        })
    }
}
