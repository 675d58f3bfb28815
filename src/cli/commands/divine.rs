use std::path::PathBuf;

use anyhow::Result;

use super::super::args::DivineCommand;
use super::{CommandResult, CommandSummary, DivineSummary};
use crate::{
    config::ConfigOverrides,
    core::{self, DivineContext},
};

pub fn divine(cmd: DivineCommand) -> Result<CommandResult> {
    let project_root = cmd
        .common
        .project_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let overrides = ConfigOverrides::from(cmd.overrides);

    let ctx = DivineContext::new(&project_root, &overrides)?;
    let divination = core::divine(&ctx.settings)?;

    Ok(CommandResult {
        summary: CommandSummary::Divine(DivineSummary {
            divination,
            format: cmd.format,
        }),
    })
}
