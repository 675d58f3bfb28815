use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every target string was found (or nothing was asked)
/// - `Failure` (1): the run completed and found coverage gaps
/// - `Error` (2): the run could not complete (config, source, traversal or I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Some target strings were not found.
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
