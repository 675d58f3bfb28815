//! Report formatting and printing utilities.
//!
//! Kept separate from the core engine so dowser can be used as a library.
//! Every printer has a `*_to` variant taking a writer, used by the tests.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, DivineSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Divination;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Divine(summary) => print_divine(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_decode_warning(result.decode_warning_count(), verbose);
}

/// Print the result of a divine run to stdout in the requested format.
pub fn print_divine(summary: &DivineSummary) {
    print_divine_to(summary, &mut io::stdout().lock());
}

pub fn print_divine_to<W: Write>(summary: &DivineSummary, writer: &mut W) {
    let divination = &summary.divination;
    match summary.format {
        OutputFormat::Text => {
            print_missing_to(divination, writer);
            print_summary_to(divination, writer);
        }
        OutputFormat::Plain => {
            for missing in &divination.not_found {
                let _ = writeln!(writer, "{}", missing);
            }
        }
        OutputFormat::Json => print_json_to(divination, writer),
    }
}

/// Print a warning about files that could not be decoded as text.
pub fn print_decode_warning(count: usize, verbose: bool) {
    print_decode_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a decode warning to a custom writer.
///
/// Silent in verbose mode: each file was already logged.
pub fn print_decode_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be decoded as UTF-8 and were skipped (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_missing_to<W: Write>(divination: &Divination, writer: &mut W) {
    for missing in &divination.not_found {
        let _ = writeln!(writer, "{} \"{}\"", "missing:".bold().red(), missing);
    }
    if divination.has_gaps() {
        let _ = writeln!(writer);
    }
}

fn print_summary_to<W: Write>(divination: &Divination, writer: &mut W) {
    let files = format!(
        "{} {} searched",
        divination.scanned_files,
        if divination.scanned_files == 1 {
            "file"
        } else {
            "files"
        }
    );

    let line = if divination.has_gaps() {
        let missing = divination.not_found.len();
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} {} not found ({})",
                missing,
                divination.target_count,
                if divination.target_count == 1 {
                    "string"
                } else {
                    "strings"
                },
                files
            )
            .red()
        )
    } else if divination.target_count == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No target strings to look for ({})", files).green()
        )
    } else {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Found all {} {} ({})",
                divination.target_count,
                if divination.target_count == 1 {
                    "string"
                } else {
                    "strings"
                },
                files
            )
            .green()
        )
    };
    let _ = writeln!(writer, "{}", line);
}

fn print_json_to<W: Write>(divination: &Divination, writer: &mut W) {
    if serde_json::to_writer_pretty(&mut *writer, divination).is_ok() {
        let _ = writeln!(writer);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
