//! Core string-presence engine.
//!
//! One run ("divination") goes:
//!
//! 1. **Resolve** target strings from the configured [`StringSource`]
//! 2. **Enumerate** every file under the ground directory
//! 3. **Scan** files with an allowed extension for each target string
//! 4. **Report** the targets never found, in input order
//!
//! Every run owns its data; nothing is cached between runs.

pub mod context;
pub mod coverage;
pub mod extensions;
pub mod file_scanner;
pub mod scanner;
pub mod settings;
pub mod sources;
pub mod text;

use serde::Serialize;
use tracing::debug;

pub use context::DivineContext;
pub use coverage::report;
pub use extensions::ExtensionSet;
pub use file_scanner::{Enumeration, enumerate_files};
pub use scanner::{DecodeWarning, OccurrenceSet, ScanOutcome, scan};
pub use settings::{Settings, SourceSettings};
pub use sources::{
    ManifestSource, ResolveStrings, SheetProvider, SheetRequest, SheetSource, StringSource,
};

use crate::error::Result;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Divination {
    /// Coverage gaps: targets absent from every scanned file.
    pub not_found: Vec<String>,
    pub target_count: usize,
    pub enumerated_files: usize,
    pub scanned_files: usize,
    pub skipped_by_extension: usize,
    /// Directory entries that could not be accessed during traversal.
    pub inaccessible_paths: usize,
    #[serde(serialize_with = "serialize_warnings")]
    pub decode_warnings: Vec<DecodeWarning>,
}

impl Divination {
    pub fn found_count(&self) -> usize {
        self.target_count - self.not_found.len()
    }

    pub fn has_gaps(&self) -> bool {
        !self.not_found.is_empty()
    }
}

fn serialize_warnings<S>(
    warnings: &[DecodeWarning],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(warnings.iter().map(|w| w.to_string()))
}

/// Run the full pipeline with the source selected by `settings`.
pub fn divine(settings: &Settings) -> Result<Divination> {
    let mut source = StringSource::from_settings(&settings.source)?;
    divine_with(settings, &mut source)
}

/// Run the full pipeline against an explicit string source.
pub fn divine_with(settings: &Settings, source: &mut StringSource) -> Result<Divination> {
    let targets = source.resolve()?;
    debug!(
        "resolved {} target string(s) from {}",
        targets.len(),
        source.describe()
    );

    let enumeration = enumerate_files(&settings.ground_directory, &settings.ignores)?;
    debug!(
        "found {} file(s) under {}",
        enumeration.files.len(),
        settings.ground_directory.display()
    );

    debug!("searching files with extensions {}", settings.extensions);
    let outcome = scan(&enumeration.files, &targets, &settings.extensions)?;
    let not_found = report(&targets, &outcome.found);

    Ok(Divination {
        target_count: targets.len(),
        enumerated_files: enumeration.files.len(),
        scanned_files: outcome.scanned_files,
        skipped_by_extension: outcome.skipped_by_extension,
        inaccessible_paths: enumeration.skipped_count,
        decode_warnings: outcome.decode_warnings,
        not_found,
    })
}
