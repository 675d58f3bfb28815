use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::{ConfigOverrides, load_config},
    core::{self, DivineContext, Divination},
};

use super::types::{
    ConfigDto, ConfigValues, DivineParams, DivineResult, GetConfigParams, Pagination,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 500;

#[derive(Clone)]
pub struct DowserMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for DowserMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl DowserMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Report target strings that appear in no source file
    #[tool(
        description = "Read the project's target strings (spreadsheet column or water file) and list the ones that appear in no file under the ground directory. Returns paginated list in source order."
    )]
    pub async fn divine(
        &self,
        params: Parameters<DivineParams>,
    ) -> Result<CallToolResult, McpError> {
        let project_root = PathBuf::from(&params.0.project_root_path);
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        // The spreadsheet client blocks, so the run goes to the blocking pool.
        let divination = tokio::task::spawn_blocking(move || run_divine(&project_root))
            .await
            .map_err(|e| McpError::internal_error(format!("Divination aborted: {}", e), None))?
            .map_err(|e| McpError::internal_error(format!("Divination failed: {:#}", e), None))?;

        let total_count = divination.not_found.len();
        let items: Vec<String> = divination
            .not_found
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect();
        let has_more = offset + items.len() < total_count;

        let result = DivineResult {
            total_count,
            target_count: divination.target_count,
            scanned_files: divination.scanned_files,
            decode_warnings: divination
                .decode_warnings
                .iter()
                .map(ToString::to_string)
                .collect(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Get project configuration
    #[tool(description = "Get the dowser configuration that applies to a project directory.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file(),
            config_path: result
                .path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            config: ConfigValues::from(result.config),
        };

        let json_str = serde_json::to_string_pretty(&config_dto).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

fn run_divine(project_root: &Path) -> Result<Divination> {
    let ctx = DivineContext::new(project_root, &ConfigOverrides::default())?;
    Ok(core::divine(&ctx.settings)?)
}

#[tool_handler]
impl ServerHandler for DowserMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Dowser MCP finds target strings (e.g. localization keys) that are never used in a project's source tree.\n\n\
                 Available tools:\n\
                 1. get_config - Get the project's .dowserrc.json configuration\n\
                 2. divine - List target strings that appear in no scanned file (paginated)\n\n\
                 Strings come from the configured spreadsheet column when 'strings-sheet-url' is set,\n\
                 otherwise from the 'water-file' manifest. Only files whose extension is listed in\n\
                 'water-extensions' are searched."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = DowserMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
