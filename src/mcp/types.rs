use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DivineParams {
    /// Absolute path of the project; `.dowserrc.json` is searched from here upward
    pub project_root_path: String,
    /// Maximum number of missing strings to return (default 50, max 500)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of missing strings to skip
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project; `.dowserrc.json` is searched from here upward
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    /// Path of the loaded config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub water_extensions: String,
    pub ground_directory: String,
    pub strings_sheet_url: Option<String>,
    pub api_key_file: Option<String>,
    pub strings_sheet_index: usize,
    pub strings_column_index: usize,
    pub water_file: Option<String>,
    pub ignores: Vec<String>,
    pub sheet_timeout_secs: u64,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            water_extensions: c.water_extensions,
            ground_directory: c.ground_directory,
            strings_sheet_url: c.strings_sheet_url,
            api_key_file: c.api_key_file,
            strings_sheet_index: c.strings_sheet_index,
            strings_column_index: c.strings_column_index,
            water_file: c.water_file,
            ignores: c.ignores,
            sheet_timeout_secs: c.sheet_timeout_secs,
        }
    }
}

// ============================================================
// Divine Types (divine)
// ============================================================

/// Result of the divine tool
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DivineResult {
    /// Number of target strings not found anywhere
    pub total_count: usize,
    /// Number of target strings read from the source
    pub target_count: usize,
    pub scanned_files: usize,
    /// Files skipped because they are not valid UTF-8
    pub decode_warnings: Vec<String>,
    /// Missing strings, in source order
    pub items: Vec<String>,
    pub pagination: Pagination,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
