use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::Divination;

#[derive(Debug)]
pub enum CommandSummary {
    Divine(DivineSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DivineSummary {
    pub divination: Divination,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running dowser commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// `Failure` when any target string was not found.
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Divine(summary) if summary.divination.has_gaps() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }

    /// Number of files that could not be decoded as text.
    pub fn decode_warning_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Divine(summary) => summary.divination.decode_warnings.len(),
            CommandSummary::Init(_) => 0,
        }
    }
}
