//! Dispatch parsed arguments to the command handlers.
//!
//! `serve` never reaches this point: `main` starts the MCP server before
//! calling [`run`].
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, divine::divine, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Divine(cmd)) => divine(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => bail!("Serve command should be handled before run()"),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
