//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `divine`: Report target strings that never appear in the ground directory
//! - `init`: Initialize dowser configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Divine(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that read configuration.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the .dowserrc.json search from (default: current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Per-run overrides of `.dowserrc.json` keys.
#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// Root of the directory tree to search (overrides config file)
    #[arg(long)]
    pub ground_directory: Option<PathBuf>,

    /// Comma-separated extensions to search, e.g. ".java, .js" (overrides config file)
    #[arg(long)]
    pub water_extensions: Option<String>,

    /// Local file with one target string per line (overrides config file)
    #[arg(long)]
    pub water_file: Option<PathBuf>,

    /// Google spreadsheet holding the target strings (overrides config file)
    #[arg(long)]
    pub strings_sheet_url: Option<String>,

    /// Google credentials JSON used to read the spreadsheet
    #[arg(long, env = "DOWSER_API_KEY_FILE")]
    pub api_key_file: Option<PathBuf>,

    /// 0-based worksheet index within the spreadsheet
    #[arg(long)]
    pub strings_sheet_index: Option<usize>,

    /// 0-based column index holding the target strings
    #[arg(long)]
    pub strings_column_index: Option<usize>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            water_extensions: args.water_extensions,
            ground_directory: args.ground_directory,
            strings_sheet_url: args.strings_sheet_url,
            api_key_file: args.api_key_file,
            strings_sheet_index: args.strings_sheet_index,
            strings_column_index: args.strings_column_index,
            water_file: args.water_file,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Missing strings with a summary line
    #[default]
    Text,
    /// Missing strings only, one per line
    Plain,
    /// Full result as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct DivineCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report target strings that appear in no file under the ground directory
    Divine(DivineCommand),
    /// Initialize a new .dowserrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
