use std::process::ExitCode;

use clap::Parser;
use dowser::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    dowser::logging::init(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = dowser::mcp::run_server() {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match dowser::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
